use crate::token::{TokenKind, classify};

#[test]
fn test_call_marker_prefix_is_function() {
    assert_eq!(classify("$PRINT"), TokenKind::Function);
    assert_eq!(classify("$x"), TokenKind::Function);
    // a bare marker still classifies as a (nameless) function lexeme
    assert_eq!(classify("$"), TokenKind::Function);
}

#[test]
fn test_exact_delimiters() {
    assert_eq!(classify("("), TokenKind::ParenOpen);
    assert_eq!(classify(")"), TokenKind::ParenClose);
    assert_eq!(classify(","), TokenKind::Comma);
}

#[test]
fn test_quoted_text_is_string() {
    assert_eq!(classify("\"hi\""), TokenKind::String);
    assert_eq!(classify("\"\""), TokenKind::String);
    assert_eq!(classify("\"a b,c\""), TokenKind::String);
}

#[test]
fn test_lone_quote_is_not_a_string() {
    // both-ends check requires length >= 2
    assert_eq!(classify("\""), TokenKind::Identifier);
}

#[test]
fn test_numeric_text_is_number() {
    assert_eq!(classify("42"), TokenKind::Number);
    assert_eq!(classify("2.5"), TokenKind::Number);
    assert_eq!(classify("-1"), TokenKind::Number);
    assert_eq!(classify("1e3"), TokenKind::Number);
}

#[test]
fn test_everything_else_is_identifier() {
    assert_eq!(classify("x"), TokenKind::Identifier);
    assert_eq!(classify("12abc"), TokenKind::Identifier);
    assert_eq!(classify("snake_case"), TokenKind::Identifier);
    assert_eq!(classify("\"unclosed"), TokenKind::Identifier);
}
