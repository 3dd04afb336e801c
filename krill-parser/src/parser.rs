// Krill Parser
// Two-mode recursive descent over a lexeme sequence with parenthesis-parity
// bookkeeping for nested calls

use crate::ast::{Expr, Literal, Span};
use crate::error::ParseError;
use crate::lexer::{Lexeme, scan_line};
use crate::token::{CALL_MARKER, TokenKind};

/// Parser for one line of source text.
///
/// The source is kept around so every error can carry the full line and a
/// labelled span.
pub struct LineParser<'src> {
    src: &'src str,
}

impl<'src> LineParser<'src> {
    pub fn new(src: &'src str) -> Self {
        Self { src }
    }

    /// Scan and parse the line into exactly one root expression.
    pub fn parse(&self) -> Result<Expr, ParseError> {
        let lexemes = scan_line(self.src)?;
        self.parse_expression(&lexemes)
    }

    /// Top-level mode: exactly one expression expected.
    ///
    /// A function lexeme with nothing after it (or with anything other than
    /// an opening paren) is a zero-argument call; whether zero arguments are
    /// acceptable is the static analyzer's decision. Lexemes after the first
    /// complete expression are ignored.
    fn parse_expression(&self, lexemes: &[Lexeme]) -> Result<Expr, ParseError> {
        let Some(first) = lexemes.first() else {
            return Err(ParseError::EmptyInput);
        };

        match first.kind() {
            TokenKind::Function => {
                let name = call_name(first);
                if lexemes.len() > 1 && lexemes[1].kind() == TokenKind::ParenOpen {
                    let close = self.find_matching_close(lexemes, 1)?;
                    let args = self.parse_parameters(&lexemes[2..close])?;
                    Ok(Expr::Call {
                        name,
                        args,
                        span: first.span.join(lexemes[close].span),
                    })
                } else {
                    Ok(Expr::Call {
                        name,
                        args: Vec::new(),
                        span: first.span,
                    })
                }
            }
            TokenKind::Identifier => Ok(Expr::Identifier {
                name: first.text.clone(),
                span: first.span,
            }),
            TokenKind::Number => Ok(Expr::Literal {
                value: Literal::number(first.text.clone()),
                span: first.span,
            }),
            TokenKind::String => Ok(Expr::Literal {
                value: Literal::string(strip_quotes(&first.text)),
                span: first.span,
            }),
            TokenKind::ParenOpen | TokenKind::ParenClose | TokenKind::Comma => {
                Err(ParseError::UnexpectedToken {
                    lexeme: first.text.clone(),
                    src: self.src.to_string(),
                    span: first.span.into(),
                })
            }
        }
    }

    /// Parameter-list mode: a flat lexeme run known to lie strictly inside
    /// one matched paren pair.
    ///
    /// Commas are separators and are skipped. A nested call triggers a
    /// bounded sub-scan starting at parity 1; the parity bookkeeping is what
    /// keeps commas belonging to the nested call's own argument list from
    /// being read as separators of this list.
    fn parse_parameters(&self, lexemes: &[Lexeme]) -> Result<Vec<Expr>, ParseError> {
        let mut parameters = Vec::new();
        let mut index = 0;

        while index < lexemes.len() {
            let lexeme = &lexemes[index];
            match lexeme.kind() {
                TokenKind::Comma => {}
                TokenKind::Identifier => parameters.push(Expr::Identifier {
                    name: lexeme.text.clone(),
                    span: lexeme.span,
                }),
                TokenKind::Number => parameters.push(Expr::Literal {
                    value: Literal::number(lexeme.text.clone()),
                    span: lexeme.span,
                }),
                TokenKind::String => parameters.push(Expr::Literal {
                    value: Literal::string(strip_quotes(&lexeme.text)),
                    span: lexeme.span,
                }),
                TokenKind::Function => {
                    match lexemes.get(index + 1) {
                        Some(next) if next.kind() == TokenKind::ParenOpen => {}
                        _ => {
                            return Err(ParseError::ExpectedParenthesis {
                                name: call_name(lexeme),
                                src: self.src.to_string(),
                                span: lexeme.span.into(),
                            });
                        }
                    }

                    let close = self.find_matching_close(lexemes, index + 1)?;
                    let args = self.parse_parameters(&lexemes[index + 2..close])?;
                    parameters.push(Expr::Call {
                        name: call_name(lexeme),
                        args,
                        span: lexeme.span.join(lexemes[close].span),
                    });
                    // resume immediately past the matched close
                    index = close;
                }
                TokenKind::ParenOpen | TokenKind::ParenClose => {
                    return Err(ParseError::StrayParenthesis {
                        lexeme: lexeme.text.clone(),
                        src: self.src.to_string(),
                        span: lexeme.span.into(),
                    });
                }
            }
            index += 1;
        }

        Ok(parameters)
    }

    /// Find the close paren matching the open paren at `open_index`,
    /// tracking parenthesis parity from that point.
    fn find_matching_close(
        &self,
        lexemes: &[Lexeme],
        open_index: usize,
    ) -> Result<usize, ParseError> {
        let mut parity = 0usize;
        for (index, lexeme) in lexemes.iter().enumerate().skip(open_index) {
            match lexeme.kind() {
                TokenKind::ParenOpen => parity += 1,
                TokenKind::ParenClose => {
                    parity -= 1;
                    if parity == 0 {
                        return Ok(index);
                    }
                }
                _ => {}
            }
        }

        Err(ParseError::UnmatchedParenthesis {
            src: self.src.to_string(),
            span: lexemes[open_index].span.into(),
        })
    }
}

fn call_name(lexeme: &Lexeme) -> String {
    lexeme
        .text
        .strip_prefix(CALL_MARKER)
        .unwrap_or(&lexeme.text)
        .to_string()
}

fn strip_quotes(text: &str) -> String {
    text[1..text.len() - 1].to_string()
}
