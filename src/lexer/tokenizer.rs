use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExprToken, Operator};
use crate::numeric::is_numeric;

static CONST_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^const\s+([a-zA-Z][_a-zA-Z0-9]*)\s*=\s*(.+)$").unwrap());

static DICT_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z][_a-zA-Z0-9]*)\s*:\s*(.+?)(,?)$").unwrap());

static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][_a-zA-Z0-9]*$").unwrap());

/// Split `const <name> = <value>` into name and trimmed value text.
pub fn split_const(line: &str) -> Option<(&str, &str)> {
    let caps = CONST_DECL.captures(line)?;
    let name = caps.get(1)?.as_str();
    let value = caps.get(2)?.as_str().trim();
    Some((name, value))
}

/// Split `<key> : <value>[,]` into key and value text, trailing comma removed.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    let caps = DICT_ENTRY.captures(line)?;
    let key = caps.get(1)?.as_str();
    let mut value = caps.get(2)?.as_str().trim();
    // `key : 5,,` leaves one comma inside the lazy group
    if let Some(stripped) = value.strip_suffix(',') {
        value = stripped.trim_end();
    }
    Some((key, value))
}

pub fn tokenize_expression(expr: &str) -> impl Iterator<Item = ExprToken<'_>> {
    expr.split_whitespace().map(classify_token)
}

fn classify_token(token: &str) -> ExprToken<'_> {
    if is_numeric(token) {
        ExprToken::Number(token)
    } else if IDENT.is_match(token) {
        ExprToken::Name(token)
    } else if let Some(op) = Operator::from_token(token) {
        ExprToken::Operator(op)
    } else {
        ExprToken::Unknown(token)
    }
}
