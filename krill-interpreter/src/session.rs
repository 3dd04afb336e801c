//! Per-session interpreter state.
//!
//! A session owns exactly one variable environment, one shutdown flag, and
//! the byte sink builtins write outward to. Sessions are created by the host
//! and mutated only by registry actions; the registry itself holds no
//! session back-reference, so any number of sessions can share one
//! interpreter.

use crate::environment::Environment;
use crate::error::RuntimeError;
use std::io::{self, Write};

/// Mutable state threaded through evaluation of every line
pub struct Session {
    environment: Environment,
    shutdown_requested: bool,
    output: Box<dyn Write>,
}

impl Session {
    /// Create a session writing output to stdout
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Create a session with a custom output sink (tests, embedding hosts)
    pub fn with_writer(output: Box<dyn Write>) -> Self {
        Self {
            environment: Environment::new(),
            shutdown_requested: false,
            output,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Whether a builtin has asked the host loop to stop prompting
    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }

    pub fn request_shutdown(&mut self) {
        self.shutdown_requested = true;
    }

    /// Write one line of text to the session's output sink
    pub fn write_line(&mut self, text: &str) -> Result<(), RuntimeError> {
        writeln!(self.output, "{text}").map_err(|error| RuntimeError::OutputFailed {
            message: error.to_string(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
