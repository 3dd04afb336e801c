// Krill AST Definitions
// One expression per line: a call, an identifier, or a literal

use std::fmt;

/// Byte range into the source line an AST node was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`
    pub fn join(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.start.into(), span.end - span.start)
    }
}

/// Kind tag carried by every literal value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    String,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Number => write!(f, "Number"),
            LiteralKind::String => write!(f, "String"),
        }
    }
}

/// A literal value: the kind tag plus its text
///
/// String literal text is stored without the delimiting quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub text: String,
}

impl Literal {
    pub fn number(text: impl Into<String>) -> Self {
        Self {
            kind: LiteralKind::Number,
            text: text.into(),
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self {
            kind: LiteralKind::String,
            text: text.into(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A parsed expression
///
/// Call children are in call-argument order. Identifier and literal
/// nodes are always leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Call {
        name: String,
        args: Vec<Expr>,
        span: Span,
    },
    Identifier {
        name: String,
        span: Span,
    },
    Literal {
        value: Literal,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Call { span, .. } | Expr::Identifier { span, .. } | Expr::Literal { span, .. } => {
                *span
            }
        }
    }
}

/// Depth-first walk over an expression tree, calling `f` with each node and
/// its nesting depth.
///
/// This is a diagnostic/formatting visitor only; evaluation has its own
/// traversal and never goes through here.
pub fn walk<F>(expr: &Expr, f: &mut F)
where
    F: FnMut(&Expr, usize),
{
    walk_at(expr, 0, f);
}

fn walk_at<F>(expr: &Expr, depth: usize, f: &mut F)
where
    F: FnMut(&Expr, usize),
{
    f(expr, depth);
    if let Expr::Call { args, .. } = expr {
        for arg in args {
            walk_at(arg, depth + 1, f);
        }
    }
}
