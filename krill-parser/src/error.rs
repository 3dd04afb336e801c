// Krill Parser Error Handling
// Syntax errors with miette integration

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Syntax errors produced while scanning or parsing one line
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("Empty input")]
    #[diagnostic(
        code(krill::parse::empty_input),
        help("Enter a call such as $PRINT(\"hi\"), an identifier, or a literal")
    )]
    EmptyInput,

    #[error("Unterminated string literal")]
    #[diagnostic(
        code(krill::parse::unterminated_string),
        help("Close the string with a matching '\"' before the end of the line")
    )]
    UnterminatedString {
        #[source_code]
        src: String,
        #[label("string opened here")]
        span: SourceSpan,
    },

    #[error("Unmatched parenthesis")]
    #[diagnostic(
        code(krill::parse::unmatched_parenthesis),
        help("Every '(' needs a matching ')' on the same line")
    )]
    UnmatchedParenthesis {
        #[source_code]
        src: String,
        #[label("opened here")]
        span: SourceSpan,
    },

    #[error("Expected '(' after ${name}")]
    #[diagnostic(
        code(krill::parse::expected_parenthesis),
        help("A call used as an argument must spell out its parentheses, e.g. $END()")
    )]
    ExpectedParenthesis {
        name: String,
        #[source_code]
        src: String,
        #[label("this call needs an argument list")]
        span: SourceSpan,
    },

    #[error("Unexpected '{lexeme}' at start of expression")]
    #[diagnostic(
        code(krill::parse::unexpected_token),
        help("A line must start with a call, an identifier, or a literal")
    )]
    UnexpectedToken {
        lexeme: String,
        #[source_code]
        src: String,
        #[label("not valid here")]
        span: SourceSpan,
    },

    #[error("Unexpected '{lexeme}' in argument list")]
    #[diagnostic(
        code(krill::parse::stray_parenthesis),
        help("Parentheses inside an argument list only belong to a nested call")
    )]
    StrayParenthesis {
        lexeme: String,
        #[source_code]
        src: String,
        #[label("not valid here")]
        span: SourceSpan,
    },
}
