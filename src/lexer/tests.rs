#[cfg(test)]
use super::*;

#[test]
fn test_read_all_lines_handles_crlf_and_trailing_newline() {
    let lines = read_all_lines("const a = 1\r\n([\r\n])\n");
    assert_eq!(lines, vec!["const a = 1", "([", "])"]);
}

#[test]
fn test_read_all_lines_drops_trailing_empty_lines() {
    assert_eq!(read_all_lines("([\n a : 1\n\n\n"), vec!["([", " a : 1"]);
    assert_eq!(read_all_lines("a\n\nb\n  \n"), vec!["a", "", "b", "  "]);
    assert!(read_all_lines("\n\n").is_empty());
}

#[test]
fn test_lexer_cursor_moves_forward_only() {
    let mut lexer = Lexer::new("  ([  \nkey : 1\n])");
    assert_eq!(lexer.current(), Some("(["));
    assert_eq!(lexer.line(), 1);

    lexer.advance();
    lexer.advance();
    assert_eq!(lexer.current(), Some("])"));
    assert_eq!(lexer.line(), 3);

    lexer.advance();
    lexer.advance();
    assert!(lexer.is_eof());
    assert_eq!(lexer.current(), None);
    assert_eq!(lexer.line(), 4);
    assert_eq!(lexer.line_count(), 3);
}

#[test]
fn test_classify_by_prefix() {
    assert_eq!(classify(""), LineKind::Skip);
    assert_eq!(classify("*> a comment"), LineKind::Skip);
    assert_eq!(classify("const pi = 3.14"), LineKind::Const);
    assert_eq!(classify("constant = 1"), LineKind::Other);
    assert_eq!(classify("(["), LineKind::DictOpen);
    assert_eq!(classify("])"), LineKind::DictClose);
    assert_eq!(classify("]),"), LineKind::DictClose);
    assert_eq!(classify("key : 1"), LineKind::Other);
}

#[test]
fn test_split_const() {
    assert_eq!(split_const("const pi = 3.1415"), Some(("pi", "3.1415")));
    assert_eq!(split_const("const  area=@{r r *}"), Some(("area", "@{r r *}")));
    assert_eq!(split_const("const 123invalid = 10"), None);
    assert_eq!(split_const("const x ="), None);
}

#[test]
fn test_split_entry_strips_trailing_comma() {
    assert_eq!(split_entry("area : @{radius radius * pi *},"), Some(("area", "@{radius radius * pi *}")));
    assert_eq!(split_entry("key:5"), Some(("key", "5")));
    assert_eq!(split_entry("key : 5 ,"), Some(("key", "5")));
    assert_eq!(split_entry("key : 5,,"), Some(("key", "5")));
    assert_eq!(split_entry("nested : (["), Some(("nested", "([")));
    assert_eq!(split_entry("9key : 5"), None);
    assert_eq!(split_entry("key 5"), None);
    assert_eq!(split_entry("key :"), None);
}

#[test]
fn test_expression_body() {
    assert_eq!(expression_body("@{ 1 2 + }"), Some("1 2 +"));
    assert_eq!(expression_body("@{}"), Some(""));
    assert_eq!(expression_body("@{1 2 +"), None);
    assert_eq!(expression_body("12"), None);
}

#[test]
fn test_tokenize_expression() {
    let tokens: Vec<_> = tokenize_expression("radius  2 *\tpi min() -1.5 ^ -").collect();
    assert_eq!(
        tokens,
        vec![
            ExprToken::Name("radius"),
            ExprToken::Number("2"),
            ExprToken::Operator(Operator::Mul),
            ExprToken::Name("pi"),
            ExprToken::Operator(Operator::Min),
            ExprToken::Number("-1.5"),
            ExprToken::Unknown("^"),
            ExprToken::Operator(Operator::Sub),
        ]
    );
}

#[test]
fn test_operator_symbols_round_trip() {
    for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div, Operator::Min] {
        assert_eq!(Operator::from_token(op.symbol()), Some(op));
    }
    assert_eq!(Operator::from_token("min"), None);
    assert_eq!(Operator::from_token("^"), None);
}
