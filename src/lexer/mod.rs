// Author: Dustin Pilgrim
// License: MIT

mod scanner;
mod tokenizer;

pub use scanner::{is_skippable, read_all_lines};
pub use tokenizer::{split_const, split_entry, tokenize_expression};

pub const COMMENT_MARKER: &str = "*>";
pub const CONST_KEYWORD: &str = "const ";
pub const DICT_OPEN: &str = "([";
pub const DICT_CLOSE: &str = "])";
pub const EXPR_OPEN: &str = "@{";
pub const EXPR_CLOSE: &str = "}";

/// What a trimmed source line starts, judged by its prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Blank or full-line comment.
    Skip,
    Const,
    DictOpen,
    DictClose,
    /// Anything else: a dictionary entry inside a block, an error at the root.
    Other,
}

/// Arithmetic operators understood inside `@{ ... }`. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Min,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "min()" => Some(Operator::Min),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Min => "min()",
        }
    }
}

/// A single whitespace-separated token of a postfix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprToken<'a> {
    Number(&'a str),
    /// Identifier-shaped word; a constant if the table knows it.
    Name(&'a str),
    Operator(Operator),
    Unknown(&'a str),
}

/// Line cursor over the source text.
///
/// The position only moves forward, through [`Lexer::advance`].
pub struct Lexer<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            lines: read_all_lines(input),
            pos: 0,
        }
    }

    /// Current line, trimmed; `None` once every line has been consumed.
    pub fn current(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied().map(str::trim)
    }

    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// 1-based number of the current line. At end of input this is one past the last line.
    pub fn line(&self) -> usize {
        self.pos + 1
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Classify a trimmed line by its leading marker.
pub fn classify(line: &str) -> LineKind {
    if is_skippable(line) {
        LineKind::Skip
    } else if line.starts_with(CONST_KEYWORD) {
        LineKind::Const
    } else if line.starts_with(DICT_OPEN) {
        LineKind::DictOpen
    } else if line.starts_with(DICT_CLOSE) {
        LineKind::DictClose
    } else {
        LineKind::Other
    }
}

/// The inner text of an `@{ ... }` value, trimmed, if `value` is one.
pub fn expression_body(value: &str) -> Option<&str> {
    value
        .strip_prefix(EXPR_OPEN)
        .and_then(|rest| rest.strip_suffix(EXPR_CLOSE))
        .map(str::trim)
}

#[cfg(test)]
mod tests;
