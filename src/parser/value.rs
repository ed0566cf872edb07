use super::*;
use crate::evaluator::evaluate;
use crate::numeric;
use tracing::trace;

/// Resolve the text to the right of `=` or `:`.
///
/// Tried in order: `@{ ... }` expression, nested `([` block, numeric literal,
/// constant name.
pub(super) fn parse_value(parser: &mut Parser, raw: &str) -> Result<Value, ParseError> {
    let line = parser.line();

    if let Some(expr) = lexer::expression_body(raw) {
        trace!(expr, line, "evaluating expression");
        return evaluate(expr, &parser.constants, line).map(Value::Decimal);
    }

    if raw == lexer::DICT_OPEN {
        parser.lexer.advance();
        return document::parse_dictionary(parser, false).map(Value::Document);
    }

    if numeric::is_numeric(raw) {
        return numeric::parse_literal(raw).map_err(|e| ParseError::NumericOverflow {
            detail: format!("{} ({})", e, raw),
            line,
        });
    }

    match parser.constants.resolve(raw) {
        Some(value) => {
            trace!(name = raw, line, "constant substituted");
            Ok(value.clone())
        }
        None => Err(ParseError::UnresolvedValue {
            token: raw.to_string(),
            line,
        }),
    }
}
