//! CLI definition for the kanban-dnd command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// How boards and settings are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// kanban-dnd - drag-driven kanban board engine
///
/// Replays scripted board commands and drag gestures and prints the resulting board.
#[derive(Parser, Debug)]
#[command(name = "kanban-dnd")]
#[command(version)]
#[command(about = "Replay drag scenarios against an in-memory kanban board")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Board configuration file (defaults to .kanban-dnd.{toml,yaml,yml,json} in the
    /// working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a scenario file and print the final board
    Replay {
        /// Path to the YAML scenario
        scenario: PathBuf,
    },
    /// Show the effective board configuration
    Config,
}
