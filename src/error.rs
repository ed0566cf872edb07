// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

/// Errors raised while parsing a config document.
///
/// Every variant carries the 1-based line on which the problem was detected.
/// Parsing stops at the first error; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected token at line {line}: {token}")]
    UnexpectedToken { token: String, line: usize },

    #[error("invalid constant declaration at line {line}: {message}")]
    InvalidConstantDeclaration { message: String, line: usize },

    #[error("invalid dictionary entry at line {line}: {entry}")]
    InvalidDictionaryEntry { entry: String, line: usize },

    #[error("closing `])` not found for dictionary (input ended at line {line})")]
    UnterminatedDictionary { line: usize },

    #[error("unknown value or constant at line {line}: {token}")]
    UnresolvedValue { token: String, line: usize },

    #[error("constant `{name}` at line {line} is not a number")]
    NonNumericConstant { name: String, line: usize },

    #[error("not enough operands for `{operator}` at line {line}")]
    InsufficientOperands { operator: String, line: usize },

    #[error("division by zero at line {line}")]
    DivisionByZero { line: usize },

    #[error("unknown operator or function at line {line}: {token}")]
    UnknownOperator { token: String, line: usize },

    #[error("malformed expression at line {line}: {remaining} values left on the stack")]
    MalformedExpression { remaining: usize, line: usize },

    #[error("numeric overflow at line {line}: {detail}")]
    NumericOverflow { detail: String, line: usize },
}

impl ParseError {
    /// 1-based source line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::InvalidConstantDeclaration { line, .. }
            | ParseError::InvalidDictionaryEntry { line, .. }
            | ParseError::UnterminatedDictionary { line }
            | ParseError::UnresolvedValue { line, .. }
            | ParseError::NonNumericConstant { line, .. }
            | ParseError::InsufficientOperands { line, .. }
            | ParseError::DivisionByZero { line }
            | ParseError::UnknownOperator { line, .. }
            | ParseError::MalformedExpression { line, .. }
            | ParseError::NumericOverflow { line, .. } => *line,
        }
    }

    /// Stable numeric code, grouped by layer: 2xx grammar, 3xx values, 4xx arithmetic.
    pub fn code(&self) -> u32 {
        match self {
            ParseError::UnexpectedToken { .. } => 201,
            ParseError::InvalidConstantDeclaration { .. } => 202,
            ParseError::InvalidDictionaryEntry { .. } => 203,
            ParseError::UnterminatedDictionary { .. } => 204,
            ParseError::UnresolvedValue { .. } => 301,
            ParseError::NonNumericConstant { .. } => 302,
            ParseError::InsufficientOperands { .. } => 401,
            ParseError::DivisionByZero { .. } => 402,
            ParseError::UnknownOperator { .. } => 403,
            ParseError::MalformedExpression { .. } => 404,
            ParseError::NumericOverflow { .. } => 405,
        }
    }
}

/// Errors from the layers around the parser: file loading, export and typed access.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load config from '{primary}' or fallback '{fallback}'")]
    NoConfigFound { primary: String, fallback: String },

    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("key not found: {path}")]
    MissingKey { path: String },

    #[error("type error at '{path}'{}: expected {expected}, got {found}", line_suffix(.line))]
    Type {
        path: String,
        line: usize,
        expected: &'static str,
        found: String,
    },
}

fn line_suffix(line: &usize) -> String {
    if *line > 0 {
        format!(" (line {})", line)
    } else {
        String::new()
    }
}

impl ConfigError {
    pub(crate) fn type_error(expected: &'static str, found: impl Into<String>) -> Self {
        ConfigError::Type {
            path: String::new(),
            line: 0,
            expected,
            found: found.into(),
        }
    }

    /// Fill in the lookup path, and the source line when known, on type errors
    /// raised by value conversions.
    pub(crate) fn at_path(self, at: &str, line: usize) -> Self {
        match self {
            ConfigError::Type { expected, found, .. } => ConfigError::Type {
                path: at.to_string(),
                line,
                expected,
                found,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_reports_line_and_code() {
        let err = ParseError::DivisionByZero { line: 4 };
        assert_eq!(err.line(), 4);
        assert_eq!(err.code(), 402);
        assert_eq!(err.to_string(), "division by zero at line 4");
    }

    #[test]
    fn type_error_picks_up_path() {
        let err = ConfigError::type_error("integer", "document").at_path("server.port", 0);
        assert_eq!(
            err.to_string(),
            "type error at 'server.port': expected integer, got document"
        );

        let err = ConfigError::type_error("integer", "decimal 2.5").at_path("port", 3);
        assert_eq!(
            err.to_string(),
            "type error at 'port' (line 3): expected integer, got decimal 2.5"
        );
    }
}
