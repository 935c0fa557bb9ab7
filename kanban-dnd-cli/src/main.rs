//! kanban-dnd CLI - replay drag scenarios against an in-memory board.
//!
//! Commands:
//! - `kanban-dnd replay <scenario>`: Run a YAML scenario and print the final board
//! - `kanban-dnd config`: Print the effective board configuration
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error (unreadable scenario or configuration)

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kanban_dnd_cli::{load_config, render, run_replay, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("kanban_dnd=debug,kanban_dnd_cli=debug,kanban_dnd_operations=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(result_to_exit(dispatch(cli)));
}

fn dispatch(cli: Cli) -> anyhow::Result<String> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Replay { scenario } => run_replay(&scenario, config, cli.format),
        Commands::Config => render::config(&config, cli.format),
    }
}

/// Print the output, or the error chain, and convert to an exit code.
fn result_to_exit(result: anyhow::Result<String>) -> i32 {
    match result {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
