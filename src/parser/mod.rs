use tracing::debug;

use crate::ast::{Document, Value};
use crate::constants::ConstantTable;
use crate::error::ParseError;
use crate::lexer::{self, LineKind, Lexer};

mod document;
mod value;

/// One parse session over a config text.
///
/// Owns the line cursor and the constant table; neither outlives the parser.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    constants: ConstantTable,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            constants: ConstantTable::new(),
        }
    }

    /// Parse the whole input into the merged root document.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        document::parse_document(self)
    }

    /// Constants declared so far.
    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    /// Consume the parser, keeping the constant table.
    pub fn into_constants(self) -> ConstantTable {
        self.constants
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }
}

/// Parse a complete config text.
///
/// # Examples
/// ```
/// let doc = dictcfg::parse("const r = 2\n([\n  d : @{r 2 *}\n])").unwrap();
/// assert_eq!(doc.get("d").unwrap().to_string(), "4");
/// ```
pub fn parse(input: &str) -> Result<Document, ParseError> {
    Parser::new(input).parse_document()
}
