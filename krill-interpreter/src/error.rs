//! Error types for static analysis, evaluation, and the line pipeline.
//!
//! Follows the parser's miette patterns for consistent error reporting.
//! The three phases are mutually exclusive per line: a line fails in at
//! most one of them.

use krill_parser::{LiteralKind, ParseError, Span};
use miette::{Diagnostic, SourceSpan};
use std::fmt;
use thiserror::Error;

use crate::registry::ParamKind;

/// Pipeline phase that produced a line's error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Syntax,
    Static,
    Runtime,
}

impl fmt::Display for ErrorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPhase::Syntax => write!(f, "Syntax"),
            ErrorPhase::Static => write!(f, "Static"),
            ErrorPhase::Runtime => write!(f, "Runtime"),
        }
    }
}

/// Errors found by the static analyzer, before any evaluation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StaticError {
    #[error("Function not found: ${name}")]
    #[diagnostic(
        code(krill::analysis::function_not_found),
        help("Only registered builtins can be called")
    )]
    FunctionNotFound {
        name: String,
        #[label("unknown function")]
        span: Option<SourceSpan>,
    },

    #[error("${function} argument count mismatch: {found} ({expected} expected)")]
    #[diagnostic(
        code(krill::analysis::arity_mismatch),
        help("Check the builtin's signature for the number of arguments it takes")
    )]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
        #[label("wrong number of arguments")]
        span: Option<SourceSpan>,
    },

    #[error("Invalid type for argument {position} of ${function}: {found} ({expected} expected)")]
    #[diagnostic(
        code(krill::analysis::argument_type_mismatch),
        help("The argument's literal kind must match the signature exactly")
    )]
    ArgumentTypeMismatch {
        function: String,
        position: usize,
        expected: ParamKind,
        found: LiteralKind,
        #[label("kind mismatch here")]
        span: Option<SourceSpan>,
    },

    #[error(
        "Invalid ${nested} return kind for argument {position} of ${function}: {found} ({expected} expected)"
    )]
    #[diagnostic(
        code(krill::analysis::return_kind_mismatch),
        help("A nested call must return the kind the enclosing argument expects")
    )]
    ReturnKindMismatch {
        function: String,
        nested: String,
        position: usize,
        expected: ParamKind,
        found: String,
        #[label("this call returns the wrong kind")]
        span: Option<SourceSpan>,
    },
}

impl StaticError {
    pub fn function_not_found(name: &str, span: Span) -> Self {
        Self::FunctionNotFound {
            name: name.to_string(),
            span: Some(span.into()),
        }
    }

    pub fn arity_mismatch(function: &str, expected: usize, found: usize, span: Span) -> Self {
        Self::ArityMismatch {
            function: function.to_string(),
            expected,
            found,
            span: Some(span.into()),
        }
    }

    pub fn argument_type_mismatch(
        function: &str,
        position: usize,
        expected: ParamKind,
        found: LiteralKind,
        span: Span,
    ) -> Self {
        Self::ArgumentTypeMismatch {
            function: function.to_string(),
            position,
            expected,
            found,
            span: Some(span.into()),
        }
    }

    pub fn return_kind_mismatch(
        function: &str,
        nested: &str,
        position: usize,
        expected: ParamKind,
        found: Option<LiteralKind>,
        span: Span,
    ) -> Self {
        Self::ReturnKindMismatch {
            function: function.to_string(),
            nested: nested.to_string(),
            position,
            expected,
            found: match found {
                Some(kind) => kind.to_string(),
                None => "None".to_string(),
            },
            span: Some(span.into()),
        }
    }
}

/// Errors raised while evaluating an already-analyzed expression
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("Unknown identifier: {name}")]
    #[diagnostic(
        code(krill::runtime::unknown_identifier),
        help("Bind the name first, e.g. $VAR(\"x\", 5)")
    )]
    UnknownIdentifier {
        name: String,
        #[label("not bound in this session")]
        span: Option<SourceSpan>,
    },

    #[error("Invalid numeric text for ${function}: {text:?}")]
    #[diagnostic(
        code(krill::runtime::invalid_number),
        help("Identifiers are only kind-checked at evaluation; the bound text must parse as a number here")
    )]
    InvalidNumber { function: String, text: String },

    #[error("Argument {position} of ${function} produced no value")]
    #[diagnostic(
        code(krill::runtime::void_argument),
        help("A call that returns nothing cannot supply an argument value")
    )]
    VoidArgument {
        function: String,
        position: usize,
        #[label("this argument has no value")]
        span: Option<SourceSpan>,
    },

    #[error("Failed to write output: {message}")]
    #[diagnostic(code(krill::runtime::output_failed))]
    OutputFailed { message: String },

    #[error("Internal error: {message}")]
    #[diagnostic(code(krill::runtime::internal))]
    Internal { message: String },
}

impl RuntimeError {
    pub fn unknown_identifier(name: &str, span: Span) -> Self {
        Self::UnknownIdentifier {
            name: name.to_string(),
            span: Some(span.into()),
        }
    }

    pub fn invalid_number(function: &str, text: &str) -> Self {
        Self::InvalidNumber {
            function: function.to_string(),
            text: text.to_string(),
        }
    }

    pub fn void_argument(function: &str, position: usize, span: Span) -> Self {
        Self::VoidArgument {
            function: function.to_string(),
            position,
            span: Some(span.into()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Any failure a line can produce, tagged by pipeline phase
#[derive(Error, Diagnostic, Debug)]
pub enum InterpreterError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Static(#[from] StaticError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}

impl InterpreterError {
    /// Which pipeline phase rejected the line
    pub fn phase(&self) -> ErrorPhase {
        match self {
            InterpreterError::Syntax(_) => ErrorPhase::Syntax,
            InterpreterError::Static(_) => ErrorPhase::Static,
            InterpreterError::Runtime(_) => ErrorPhase::Runtime,
        }
    }
}
