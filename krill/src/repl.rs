//! REPL (Read-Eval-Print Loop) for the Krill shell.
//!
//! Drives the full parse → analyze → evaluate pipeline over one session.
//! Features:
//! - One expression per line with persistent variable bindings
//! - Slash commands for inspection (/help, /vars, /stats, ...)
//! - Per-line error recovery with miette error reporting
//! - History support and line editing with rustyline

use krill_interpreter::{ErrorPhase, Interpreter, InterpreterError, Session};
use krill_parser::{Literal, LiteralKind};
use miette::Diagnostic;
use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error;

/// Errors that can occur in the REPL itself
#[derive(Debug, Error, Diagnostic)]
pub enum ReplError {
    #[error("Readline error: {source}")]
    Readline {
        #[from]
        source: ReadlineError,
    },

    #[error("{source}")]
    Interpret {
        #[from]
        source: InterpreterError,
    },

    #[error("{message}")]
    Command { message: String },
}

/// REPL configuration options
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string for input
    pub prompt: String,

    /// Enable history persistence
    pub persist_history: bool,

    /// History file path
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "krill> ".to_string(),
            persist_history: true,
            history_file: Some(".krill_history".to_string()),
        }
    }
}

/// REPL session statistics
#[derive(Debug, Clone, Default)]
pub struct ReplStats {
    /// Number of lines run through the pipeline
    pub lines_evaluated: usize,

    /// Number of errors encountered
    pub errors_encountered: usize,

    /// Total slash commands executed
    pub commands_executed: usize,
}

/// Result of evaluating one line in the REPL
#[derive(Debug)]
enum ReplResult {
    /// Line ran; calls with no return produce `None`
    Value(Option<Literal>),

    /// Executed a slash command
    Command { message: String },

    /// Empty line
    Empty,

    /// Exit request
    Exit,
}

/// REPL session tying a line editor to one interpreter session
pub struct ReplSession {
    editor: DefaultEditor,
    interpreter: Interpreter,
    session: Session,
    config: ReplConfig,
    stats: ReplStats,
}

impl ReplSession {
    /// Create a new REPL session with default configuration
    pub fn new() -> Result<Self, ReplError> {
        Self::with_config(ReplConfig::default())
    }

    /// Create a new REPL session with custom configuration
    pub fn with_config(config: ReplConfig) -> Result<Self, ReplError> {
        let mut editor = DefaultEditor::new()?;

        if config.persist_history {
            if let Some(ref history_file) = config.history_file {
                let _ = editor.load_history(history_file); // new sessions have none yet
            }
        }

        Ok(Self {
            editor,
            interpreter: Interpreter::new(),
            session: Session::new(),
            config,
            stats: ReplStats::default(),
        })
    }

    /// Start the REPL main loop
    pub fn run(&mut self) -> Result<(), ReplError> {
        self.print_welcome();

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }

                    match self.evaluate_line(&line) {
                        Ok(ReplResult::Exit) => break,
                        Ok(result) => self.display_result(result),
                        Err(error) => {
                            self.stats.errors_encountered += 1;
                            self.display_error(error, Some(&line));
                        }
                    }

                    if self.session.shutdown_requested() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(ReplError::Readline { source: err }),
            }
        }

        self.print_goodbye();
        self.save_history()?;
        Ok(())
    }

    /// Evaluate one line: empty, slash command, or expression
    fn evaluate_line(&mut self, line: &str) -> Result<ReplResult, ReplError> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Ok(ReplResult::Empty);
        }

        if trimmed.starts_with('/') {
            return self.execute_command(trimmed);
        }

        let value = self.interpreter.process_line(&mut self.session, trimmed)?;
        self.stats.lines_evaluated += 1;
        Ok(ReplResult::Value(value))
    }

    /// Execute a slash command
    fn execute_command(&mut self, command: &str) -> Result<ReplResult, ReplError> {
        self.stats.commands_executed += 1;

        let parts: Vec<&str> = command.split_whitespace().collect();
        match parts.first().copied() {
            Some("/help") | Some("/h") => Ok(ReplResult::Command {
                message: self.help_message(),
            }),

            Some("/vars") | Some("/variables") => Ok(ReplResult::Command {
                message: self.format_variables(),
            }),

            Some("/clear") => {
                self.session.environment_mut().clear();
                Ok(ReplResult::Command {
                    message: "Variables cleared".to_string(),
                })
            }

            Some("/stats") => Ok(ReplResult::Command {
                message: self.format_stats(),
            }),

            Some("/quit") | Some("/q") | Some("/exit") => Ok(ReplResult::Exit),

            Some(unknown) => Err(ReplError::Command {
                message: format!("Unknown command: {unknown}. Type /help for available commands."),
            }),

            None => Ok(ReplResult::Empty),
        }
    }

    fn help_message(&self) -> String {
        let builtins = self.interpreter.registry().names().join(", ");
        format!(
            "One $CALL(...) expression per line, e.g. $PRINT($CONCAT(\"a\", \"b\"))\n\
             Builtins: {builtins}\n\
             Commands:\n\
             \x20 /help   show this message\n\
             \x20 /vars   list bound variables\n\
             \x20 /clear  drop all variable bindings\n\
             \x20 /stats  session statistics\n\
             \x20 /quit   leave (as does $END())"
        )
    }

    fn format_variables(&self) -> String {
        let environment = self.session.environment();
        if environment.is_empty() {
            return "No variables bound".to_string();
        }

        environment
            .names()
            .into_iter()
            .filter_map(|name| {
                environment
                    .get(name)
                    .map(|value| format!("{name} = {}", format_literal(value)))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_stats(&self) -> String {
        format!(
            "Lines evaluated: {}\nErrors: {}\nCommands: {}\nVariables bound: {}",
            self.stats.lines_evaluated,
            self.stats.errors_encountered,
            self.stats.commands_executed,
            self.session.environment().len(),
        )
    }

    fn display_result(&self, result: ReplResult) {
        match result {
            ReplResult::Value(Some(literal)) => println!("= {}", format_literal(&literal)),
            // side-effect-only calls stay quiet
            ReplResult::Value(None) => {}
            ReplResult::Command { message } => println!("{message}"),
            ReplResult::Empty | ReplResult::Exit => {}
        }
    }

    fn display_error(&self, error: ReplError, source: Option<&str>) {
        match error {
            ReplError::Interpret { source: failure } => {
                let tag = match failure.phase() {
                    ErrorPhase::Syntax => "SYNTAX ERROR",
                    ErrorPhase::Static => "STATIC ERROR",
                    ErrorPhase::Runtime => "RUNTIME ERROR",
                };
                eprintln!("\x1b[41m{tag}\x1b[0m");

                let report = miette::Report::new(failure);
                match source {
                    Some(line) => eprintln!("{:?}", report.with_source_code(line.to_string())),
                    None => eprintln!("{report:?}"),
                }
            }
            ReplError::Command { message } => println!("{message}"),
            other => eprintln!("{:?}", miette::Report::new(other)),
        }
    }

    fn print_welcome(&self) {
        println!(
            "🦐 Krill v{}. One call per line; /help for commands, $END() to leave.",
            env!("CARGO_PKG_VERSION")
        );
    }

    fn print_goodbye(&self) {
        println!("Goodbye!");
    }

    fn save_history(&mut self) -> Result<(), ReplError> {
        if self.config.persist_history {
            if let Some(ref history_file) = self.config.history_file {
                self.editor.save_history(history_file)?;
            }
        }
        Ok(())
    }
}

/// Echo a literal the way it was written: strings get their quotes back
fn format_literal(literal: &Literal) -> String {
    match literal.kind {
        LiteralKind::String => format!("\"{}\"", literal.text),
        LiteralKind::Number => literal.text.clone(),
    }
}
