//! Builtin function registry: call signatures plus executable actions.
//!
//! The registry is built once and never mutated afterwards; the static
//! analyzer reads signatures from it and the evaluator dispatches through
//! it. Actions receive their arguments and the session explicitly and
//! return an explicit optional result, so evaluating one call can never
//! disturb another call's pending state.

use crate::error::RuntimeError;
use crate::session::Session;
use krill_parser::{Literal, LiteralKind};
use std::collections::HashMap;
use std::fmt;

/// Expected kind for one positional parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    String,
    /// Wildcard: matches any argument kind, including a nested call that
    /// returns nothing
    Any,
}

impl ParamKind {
    /// Does a literal of `kind` satisfy this parameter?
    pub fn admits_literal(self, kind: LiteralKind) -> bool {
        match self {
            ParamKind::Any => true,
            ParamKind::Number => kind == LiteralKind::Number,
            ParamKind::String => kind == LiteralKind::String,
        }
    }

    /// Does a nested call declaring `returns` satisfy this parameter?
    pub fn admits_return(self, returns: Option<LiteralKind>) -> bool {
        match self {
            ParamKind::Any => true,
            ParamKind::Number => returns == Some(LiteralKind::Number),
            ParamKind::String => returns == Some(LiteralKind::String),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Number => write!(f, "Number"),
            ParamKind::String => write!(f, "String"),
            ParamKind::Any => write!(f, "Any"),
        }
    }
}

/// Executable behaviour of a builtin: explicit ordered arguments, explicit
/// session, explicit optional result
pub type BuiltinAction = fn(&[Literal], &mut Session) -> Result<Option<Literal>, RuntimeError>;

/// Declared shape of a builtin call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Ordered expected parameter kinds
    pub params: &'static [ParamKind],
    /// Kind of the produced value; `None` means the call produces no value
    pub returns: Option<LiteralKind>,
}

impl FunctionSignature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// One registered builtin
pub struct Builtin {
    pub signature: FunctionSignature,
    pub action: BuiltinAction,
}

/// Immutable name -> builtin table, shared read-only by analysis and
/// evaluation
pub struct Registry {
    builtins: HashMap<String, Builtin>,
}

impl Registry {
    /// Build the standard builtin table
    pub fn standard() -> Self {
        let mut registry = Self {
            builtins: HashMap::new(),
        };

        registry.register("PRINT", &[ParamKind::Any], None, builtin_print);
        registry.register(
            "CONCAT",
            &[ParamKind::String, ParamKind::String],
            Some(LiteralKind::String),
            builtin_concat,
        );
        registry.register("END", &[], None, builtin_end);
        registry.register(
            "VAR",
            &[ParamKind::String, ParamKind::Any],
            None,
            builtin_var,
        );
        registry.register(
            "ADD",
            &[ParamKind::Number, ParamKind::Number],
            Some(LiteralKind::Number),
            builtin_add,
        );

        registry
    }

    fn register(
        &mut self,
        name: &str,
        params: &'static [ParamKind],
        returns: Option<LiteralKind>,
        action: BuiltinAction,
    ) {
        self.builtins.insert(
            name.to_string(),
            Builtin {
                signature: FunctionSignature { params, returns },
                action,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.builtins.get(name)
    }

    pub fn signature(&self, name: &str) -> Option<&FunctionSignature> {
        self.builtins.get(name).map(|builtin| &builtin.signature)
    }

    /// All registered names, sorted (for listings and help text)
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builtins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn builtin_print(args: &[Literal], session: &mut Session) -> Result<Option<Literal>, RuntimeError> {
    let [text] = args else {
        return Err(RuntimeError::internal(format!(
            "PRINT expects 1 argument, got {}",
            args.len()
        )));
    };

    session.write_line(&text.text)?;
    Ok(None)
}

fn builtin_concat(
    args: &[Literal],
    _session: &mut Session,
) -> Result<Option<Literal>, RuntimeError> {
    let [left, right] = args else {
        return Err(RuntimeError::internal(format!(
            "CONCAT expects 2 arguments, got {}",
            args.len()
        )));
    };

    Ok(Some(Literal::string(format!(
        "{}{}",
        left.text, right.text
    ))))
}

fn builtin_end(args: &[Literal], session: &mut Session) -> Result<Option<Literal>, RuntimeError> {
    if !args.is_empty() {
        return Err(RuntimeError::internal(format!(
            "END expects no arguments, got {}",
            args.len()
        )));
    }

    session.request_shutdown();
    Ok(None)
}

fn builtin_var(args: &[Literal], session: &mut Session) -> Result<Option<Literal>, RuntimeError> {
    let [name, value] = args else {
        return Err(RuntimeError::internal(format!(
            "VAR expects 2 arguments, got {}",
            args.len()
        )));
    };

    session
        .environment_mut()
        .define(name.text.clone(), value.clone());
    Ok(None)
}

fn builtin_add(args: &[Literal], _session: &mut Session) -> Result<Option<Literal>, RuntimeError> {
    let [left, right] = args else {
        return Err(RuntimeError::internal(format!(
            "ADD expects 2 arguments, got {}",
            args.len()
        )));
    };

    let sum = parse_number("ADD", left)? + parse_number("ADD", right)?;
    Ok(Some(Literal::number(sum.to_string())))
}

/// Re-parse a literal's text as a number at evaluation time.
///
/// Static analysis cannot rule this failure out: an identifier argument may
/// have been bound to a wrongly-kinded value.
fn parse_number(function: &str, literal: &Literal) -> Result<f64, RuntimeError> {
    literal
        .text
        .parse::<f64>()
        .map_err(|_| RuntimeError::invalid_number(function, &literal.text))
}
