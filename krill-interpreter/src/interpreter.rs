//! Line-processing pipeline facade.
//!
//! One `Interpreter` owns the immutable registry and can serve any number of
//! independently-owned sessions; each call to [`Interpreter::process_line`]
//! runs lex → parse → analyze → evaluate to completion or first failure.

use crate::analyzer::Analyzer;
use crate::error::InterpreterError;
use crate::evaluator::Evaluator;
use crate::registry::Registry;
use crate::session::Session;
use krill_parser::Literal;

/// The interpreter: a registry plus the pipeline that drives it
pub struct Interpreter {
    registry: Registry,
}

impl Interpreter {
    /// Create an interpreter with the standard builtin registry
    pub fn new() -> Self {
        Self {
            registry: Registry::standard(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Process one raw line of text against a session.
    ///
    /// Returns the produced value, if any. A failed line leaves the session
    /// usable: errors are recoverable at per-line granularity and the host
    /// decides whether to keep prompting. `session.shutdown_requested()` is
    /// readable after every call.
    pub fn process_line(
        &self,
        session: &mut Session,
        line: &str,
    ) -> Result<Option<Literal>, InterpreterError> {
        let expression = krill_parser::parse_line(line)?;
        Analyzer::new(&self.registry).check(&expression)?;
        let value = Evaluator::new(&self.registry).evaluate(&expression, session)?;
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
