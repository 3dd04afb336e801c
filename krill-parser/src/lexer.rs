// Krill Lexical Scanner
// Single left-to-right pass with an accumulation buffer and quoted-string mode

use crate::ast::Span;
use crate::error::ParseError;
use crate::token::{classify, QUOTE, TokenKind};

/// A contiguous fragment of the source line, not yet classified
///
/// String lexemes keep both bounding quote characters; quotes are only
/// stripped when the parser builds literal nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub text: String,
    pub span: Span,
}

impl Lexeme {
    fn new(text: String, span: Span) -> Self {
        Self { text, span }
    }

    /// Classification of this lexeme's text
    pub fn kind(&self) -> TokenKind {
        classify(&self.text)
    }
}

/// Scan one line into an ordered lexeme sequence.
///
/// Outside quoted mode, whitespace flushes the buffer and is discarded, and
/// each of `(` `)` `,` flushes the buffer before being emitted as its own
/// one-character lexeme. The quote character toggles quoted mode and stays in
/// the buffer. Inside quoted mode every character is appended literally, so
/// parens, commas and whitespace never split a string.
///
/// A line that ends while still inside quoted mode fails with a syntax error
/// rather than silently dropping the unterminated fragment.
pub fn scan_line(input: &str) -> Result<Vec<Lexeme>, ParseError> {
    let mut lexemes = Vec::new();
    let mut buffer = String::new();
    let mut buffer_start = 0;
    let mut in_string = false;
    let mut string_open = 0;

    for (offset, ch) in input.char_indices() {
        if in_string {
            if ch == QUOTE {
                in_string = false;
            }
            buffer.push(ch);
            continue;
        }

        match ch {
            c if c.is_whitespace() => {
                flush(&mut buffer, buffer_start, &mut lexemes);
            }
            '(' | ')' | ',' => {
                flush(&mut buffer, buffer_start, &mut lexemes);
                lexemes.push(Lexeme::new(
                    ch.to_string(),
                    Span::new(offset, offset + ch.len_utf8()),
                ));
            }
            QUOTE => {
                if buffer.is_empty() {
                    buffer_start = offset;
                }
                in_string = true;
                string_open = offset;
                buffer.push(ch);
            }
            _ => {
                if buffer.is_empty() {
                    buffer_start = offset;
                }
                buffer.push(ch);
            }
        }
    }

    if in_string {
        return Err(ParseError::UnterminatedString {
            src: input.to_string(),
            span: Span::new(string_open, input.len()).into(),
        });
    }

    flush(&mut buffer, buffer_start, &mut lexemes);
    Ok(lexemes)
}

fn flush(buffer: &mut String, buffer_start: usize, lexemes: &mut Vec<Lexeme>) {
    if buffer.is_empty() {
        return;
    }
    let span = Span::new(buffer_start, buffer_start + buffer.len());
    lexemes.push(Lexeme::new(std::mem::take(buffer), span));
}
