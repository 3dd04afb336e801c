// Krill Token Classification
// Pure lexeme -> kind mapping shared by both parser modes

/// Leading character marking a lexeme as a function call
pub const CALL_MARKER: char = '$';

/// Delimiter for string literals
pub const QUOTE: char = '"';

/// Classification of a single lexeme
///
/// Signature-side concepts (the wildcard parameter kind, "returns nothing")
/// are not token kinds; they live in the interpreter's registry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Function,
    ParenOpen,
    ParenClose,
    Comma,
    Identifier,
    Number,
    String,
}

/// Classify one lexeme. Pure function of the text.
pub fn classify(lexeme: &str) -> TokenKind {
    if lexeme.starts_with(CALL_MARKER) {
        return TokenKind::Function;
    }

    match lexeme {
        "(" => return TokenKind::ParenOpen,
        ")" => return TokenKind::ParenClose,
        "," => return TokenKind::Comma,
        _ => {}
    }

    if lexeme.len() >= 2 && lexeme.starts_with(QUOTE) && lexeme.ends_with(QUOTE) {
        return TokenKind::String;
    }

    if lexeme.parse::<f64>().is_ok() {
        return TokenKind::Number;
    }

    TokenKind::Identifier
}
