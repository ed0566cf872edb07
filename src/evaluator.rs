// Author: Dustin Pilgrim
// License: MIT

use rust_decimal::Decimal;
use tracing::trace;

use crate::ast::Value;
use crate::constants::ConstantTable;
use crate::error::ParseError;
use crate::lexer::{ExprToken, Operator, tokenize_expression};
use crate::numeric::{self, ArithmeticError};

/// Evaluate the body of an `@{ ... }` value as a postfix expression.
///
/// Numbers and known constants are pushed, operators pop their right operand
/// first. Exactly one value must be left at the end; it is rounded to three
/// fractional digits with trailing zeros removed. `line` is only used for
/// error positions.
pub fn evaluate(expr: &str, constants: &ConstantTable, line: usize) -> Result<Decimal, ParseError> {
    let mut stack: Vec<Decimal> = Vec::new();

    for token in tokenize_expression(expr) {
        trace!(?token, depth = stack.len(), "expression token");
        match token {
            ExprToken::Number(text) => {
                let value = numeric::parse_decimal(text).map_err(|e| overflow(e, text, line))?;
                stack.push(value);
            }
            ExprToken::Name(name) if constants.contains(name) => {
                stack.push(constant_operand(name, constants, line)?);
            }
            ExprToken::Operator(op) => {
                let (lhs, rhs) = match (stack.pop(), stack.pop()) {
                    (Some(rhs), Some(lhs)) => (lhs, rhs),
                    _ => {
                        return Err(ParseError::InsufficientOperands {
                            operator: op.symbol().to_string(),
                            line,
                        });
                    }
                };
                stack.push(apply(op, lhs, rhs, line)?);
            }
            ExprToken::Name(other) | ExprToken::Unknown(other) => {
                return Err(ParseError::UnknownOperator {
                    token: other.to_string(),
                    line,
                });
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(numeric::normalize(*result)),
        rest => Err(ParseError::MalformedExpression {
            remaining: rest.len(),
            line,
        }),
    }
}

fn constant_operand(name: &str, constants: &ConstantTable, line: usize) -> Result<Decimal, ParseError> {
    match constants.resolve(name) {
        Some(Value::Integer(i)) => Ok(Decimal::from(*i)),
        Some(Value::Decimal(d)) => Ok(*d),
        Some(Value::Document(_)) => Err(ParseError::NonNumericConstant {
            name: name.to_string(),
            line,
        }),
        None => Err(ParseError::UnknownOperator {
            token: name.to_string(),
            line,
        }),
    }
}

fn apply(op: Operator, lhs: Decimal, rhs: Decimal, line: usize) -> Result<Decimal, ParseError> {
    let result = match op {
        Operator::Add => numeric::add(lhs, rhs),
        Operator::Sub => numeric::sub(lhs, rhs),
        Operator::Mul => numeric::mul(lhs, rhs),
        Operator::Div => numeric::div(lhs, rhs),
        Operator::Min => Ok(numeric::min(lhs, rhs)),
    };
    result.map_err(|e| overflow(e, op.symbol(), line))
}

fn overflow(err: ArithmeticError, at: &str, line: usize) -> ParseError {
    match err {
        ArithmeticError::DivisionByZero => ParseError::DivisionByZero { line },
        other => ParseError::NumericOverflow {
            detail: format!("{} ({})", other, at),
            line,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Document;
    use std::str::FromStr;

    fn eval(expr: &str) -> Result<String, ParseError> {
        let mut constants = ConstantTable::new();
        constants.declare("pi", Value::Decimal(Decimal::from_str("3.1415").unwrap()));
        constants.declare("radius", Value::Integer(10));
        constants.declare("zero", Value::Integer(0));
        evaluate(expr, &constants, 7).map(|d| d.to_string())
    }

    #[test]
    fn evaluates_circle_area() {
        assert_eq!(eval("radius radius * pi *").unwrap(), "314.15");
        assert_eq!(eval("radius 2 * pi *").unwrap(), "62.83");
    }

    #[test]
    fn integral_results_have_no_point() {
        assert_eq!(eval("radius 5 +").unwrap(), "15");
        assert_eq!(eval("42 2 *").unwrap(), "84");
        assert_eq!(eval("1.50 0.50 +").unwrap(), "2");
    }

    #[test]
    fn division_rounds_then_normalizes() {
        assert_eq!(eval("3.1415 2 /").unwrap(), "1.571");
        assert_eq!(eval("2.71828 3 *").unwrap(), "8.155");
        assert_eq!(eval("1 3 /").unwrap(), "0.333");
        assert_eq!(eval("2 3 /").unwrap(), "0.667");
    }

    #[test]
    fn right_operand_is_top_of_stack() {
        assert_eq!(eval("10 4 -").unwrap(), "6");
        assert_eq!(eval("10 4 /").unwrap(), "2.5");
        assert_eq!(eval("3 10 min()").unwrap(), "3");
        assert_eq!(eval("10 3 min()").unwrap(), "3");
        assert_eq!(eval("-2.5 pi min()").unwrap(), "-2.5");
    }

    #[test]
    fn division_by_zero_is_reported_for_any_zero() {
        for expr in ["1 0 /", "1 0.000 /", "pi zero /", "5 5 5 - /"] {
            assert_eq!(eval(expr), Err(ParseError::DivisionByZero { line: 7 }), "{}", expr);
        }
    }

    #[test]
    fn missing_operands() {
        assert_eq!(
            eval("1 +"),
            Err(ParseError::InsufficientOperands { operator: "+".into(), line: 7 })
        );
        assert_eq!(
            eval("min()"),
            Err(ParseError::InsufficientOperands { operator: "min()".into(), line: 7 })
        );
    }

    #[test]
    fn unknown_tokens_and_undeclared_names() {
        assert_eq!(eval("10 5 ^"), Err(ParseError::UnknownOperator { token: "^".into(), line: 7 }));
        assert_eq!(
            eval("radius height *"),
            Err(ParseError::UnknownOperator { token: "height".into(), line: 7 })
        );
        assert_eq!(eval("1 2 min"), Err(ParseError::UnknownOperator { token: "min".into(), line: 7 }));
    }

    #[test]
    fn leftover_or_empty_stack_is_malformed() {
        assert_eq!(eval("1 2"), Err(ParseError::MalformedExpression { remaining: 2, line: 7 }));
        assert_eq!(eval(""), Err(ParseError::MalformedExpression { remaining: 0, line: 7 }));
    }

    #[test]
    fn document_constant_is_not_a_number() {
        let mut constants = ConstantTable::new();
        constants.declare("block", Value::Document(Document::new()));
        assert_eq!(
            evaluate("block 1 +", &constants, 3),
            Err(ParseError::NonNumericConstant { name: "block".into(), line: 3 })
        );
    }

    #[test]
    fn overflow_is_reported() {
        let big = "79228162514264337593543950335";
        let err = eval(&format!("{} {} *", big, big)).unwrap_err();
        assert!(matches!(err, ParseError::NumericOverflow { line: 7, .. }));
    }
}
