use clap::{Parser, Subcommand};
use miette::MietteHandlerOpts;
use std::process;

mod highlight;
mod repl;
mod tree;

#[derive(Parser)]
#[command(
    name = "krill",
    version,
    about = "The Krill command language shell",
    long_about = "Krill is a tiny expression-oriented command language: one $CALL(...) per line, evaluated against a per-session variable environment.",
    before_help = format!("🦐 KRILL command shell v{}\n", env!("CARGO_PKG_VERSION"))
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse expressions and display their AST (debug only)
    Parse {
        /// Expressions to parse, one per argument
        #[arg(required = true, value_name = "EXPR")]
        expressions: Vec<String>,
    },
}

fn main() {
    setup_miette_handler();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse { expressions }) => handle_parse_command(expressions),
        None => run_repl(),
    }
}

/// Configure miette for readable error reporting
fn setup_miette_handler() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .color(true)
                .tab_width(4)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}

fn handle_parse_command(expressions: Vec<String>) {
    let mut success = true;

    for source in expressions {
        println!("{}", highlight::highlight_line(&source));

        match krill_parser::parse_line(&source) {
            Ok(expression) => println!("{}", tree::format_expr_tree(&expression)),
            Err(error) => {
                eprintln!("{:?}", miette::Report::new(error));
                success = false;
            }
        }
    }

    if !success {
        process::exit(1);
    }
}

fn run_repl() {
    let mut session = match repl::ReplSession::new() {
        Ok(session) => session,
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            process::exit(1);
        }
    };

    if let Err(error) = session.run() {
        eprintln!("{:?}", miette::Report::new(error));
        process::exit(1);
    }
}
