//! Tree-walking evaluator.
//!
//! Strictly synchronous: one call frame per AST node, arguments evaluated
//! left to right so earlier side effects are observable to later arguments
//! and to the call itself. Expressions are expected to have passed static
//! analysis before they reach here.

use crate::error::RuntimeError;
use crate::registry::Registry;
use crate::session::Session;
use krill_parser::{Expr, Literal};

/// Evaluator dispatching through one registry
pub struct Evaluator<'reg> {
    registry: &'reg Registry,
}

impl<'reg> Evaluator<'reg> {
    pub fn new(registry: &'reg Registry) -> Self {
        Self { registry }
    }

    /// Evaluate an expression against the session, producing at most one
    /// value.
    pub fn evaluate(
        &self,
        expr: &Expr,
        session: &mut Session,
    ) -> Result<Option<Literal>, RuntimeError> {
        match expr {
            Expr::Literal { value, .. } => Ok(Some(value.clone())),
            Expr::Identifier { name, span } => match session.environment().get(name) {
                Some(value) => Ok(Some(value.clone())),
                None => Err(RuntimeError::unknown_identifier(name, *span)),
            },
            Expr::Call { name, args, .. } => self.evaluate_call(name, args, session),
        }
    }

    fn evaluate_call(
        &self,
        name: &str,
        args: &[Expr],
        session: &mut Session,
    ) -> Result<Option<Literal>, RuntimeError> {
        let builtin = self.registry.get(name).ok_or_else(|| {
            RuntimeError::internal(format!("function ${name} was not statically checked"))
        })?;

        let mut arguments = Vec::with_capacity(args.len());
        for (index, argument) in args.iter().enumerate() {
            match self.evaluate(argument, session)? {
                Some(value) => arguments.push(value),
                None => {
                    return Err(RuntimeError::void_argument(name, index + 1, argument.span()));
                }
            }
        }

        (builtin.action)(&arguments, session)
    }
}
