//! Static analysis of parsed expressions against the builtin registry.
//!
//! A depth-first pass over the AST that resolves every call, checks arity,
//! and matches each positional argument against its expected kind. The pass
//! is purely structural: it never touches the environment, so an identifier
//! bound to a wrongly-kinded value still slips through to evaluation.

use crate::error::StaticError;
use crate::registry::Registry;
use krill_parser::{Expr, Span};

/// Signature checker for one registry
pub struct Analyzer<'reg> {
    registry: &'reg Registry,
}

impl<'reg> Analyzer<'reg> {
    pub fn new(registry: &'reg Registry) -> Self {
        Self { registry }
    }

    /// Validate an expression tree; `Ok(())` means evaluation may proceed.
    pub fn check(&self, expr: &Expr) -> Result<(), StaticError> {
        match expr {
            Expr::Call { name, args, span } => self.check_call(name, args, *span),
            // leaves carry no static obligations
            Expr::Identifier { .. } | Expr::Literal { .. } => Ok(()),
        }
    }

    fn check_call(&self, name: &str, args: &[Expr], span: Span) -> Result<(), StaticError> {
        let signature = self
            .registry
            .signature(name)
            .ok_or_else(|| StaticError::function_not_found(name, span))?;

        if args.len() != signature.arity() {
            return Err(StaticError::arity_mismatch(
                name,
                signature.arity(),
                args.len(),
                span,
            ));
        }

        for (index, (argument, &expected)) in args.iter().zip(signature.params).enumerate() {
            let position = index + 1;
            match argument {
                Expr::Call {
                    name: nested,
                    span: nested_span,
                    ..
                } => {
                    let nested_signature = self
                        .registry
                        .signature(nested)
                        .ok_or_else(|| StaticError::function_not_found(nested, *nested_span))?;

                    if !expected.admits_return(nested_signature.returns) {
                        return Err(StaticError::return_kind_mismatch(
                            name,
                            nested,
                            position,
                            expected,
                            nested_signature.returns,
                            *nested_span,
                        ));
                    }
                }
                // true kind unknowable until evaluation
                Expr::Identifier { .. } => {}
                Expr::Literal {
                    value,
                    span: literal_span,
                } => {
                    if !expected.admits_literal(value.kind) {
                        return Err(StaticError::argument_type_mismatch(
                            name,
                            position,
                            expected,
                            value.kind,
                            *literal_span,
                        ));
                    }
                }
            }
        }

        for argument in args {
            self.check(argument)?;
        }

        Ok(())
    }
}
