use super::*;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, ParseError> {
    let mut root = Document::new();

    while let Some(line) = parser.lexer.current() {
        match lexer::classify(line) {
            LineKind::Skip => {}
            LineKind::Const => {
                parse_const(parser, line)?;
            }
            LineKind::DictOpen => {
                let dict = parse_dictionary(parser, true)?;
                root.merge(dict);
            }
            LineKind::DictClose | LineKind::Other => {
                return Err(ParseError::UnexpectedToken {
                    token: line.to_string(),
                    line: parser.line(),
                });
            }
        }
        parser.lexer.advance();
    }

    Ok(root)
}

fn parse_const(parser: &mut Parser, line: &str) -> Result<(), ParseError> {
    let (name, raw) = lexer::split_const(line).ok_or_else(|| ParseError::InvalidConstantDeclaration {
        message: line.to_string(),
        line: parser.line(),
    })?;

    if raw == lexer::DICT_OPEN {
        return Err(ParseError::InvalidConstantDeclaration {
            message: format!("constant `{}` cannot hold a dictionary", name),
            line: parser.line(),
        });
    }

    let value = value::parse_value(parser, raw)?;
    debug!(name, %value, line = parser.line(), "constant declared");
    parser.constants.declare(name, value);
    Ok(())
}

/// Parse a `([ ... ])` block, leaving the cursor on its closing line.
///
/// With `expect_open` the current line must be the opening marker; nested
/// blocks enter with the cursor already on their first body line.
pub(super) fn parse_dictionary(parser: &mut Parser, expect_open: bool) -> Result<Document, ParseError> {
    if expect_open {
        match parser.lexer.current() {
            Some(line) if line.starts_with(lexer::DICT_OPEN) => parser.lexer.advance(),
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.unwrap_or_default().to_string(),
                    line: parser.line(),
                });
            }
        }
    }

    debug!(line = parser.line(), "dictionary opened");
    let mut dict = Document::new();

    loop {
        let Some(line) = parser.lexer.current() else {
            return Err(ParseError::UnterminatedDictionary { line: parser.line() });
        };

        match lexer::classify(line) {
            LineKind::DictClose => break,
            LineKind::Skip => {}
            _ => {
                let (key, raw) = lexer::split_entry(line).ok_or_else(|| ParseError::InvalidDictionaryEntry {
                    entry: line.to_string(),
                    line: parser.line(),
                })?;
                let value = value::parse_value(parser, raw)?;
                dict.insert(key, value);
            }
        }
        parser.lexer.advance();
    }

    debug!(line = parser.line(), keys = dict.len(), "dictionary closed");
    Ok(dict)
}
