//! kanban-dnd CLI library.
//!
//! Scenario parsing, replay and rendering live here so they can be tested
//! without spawning the binary.

pub mod cli;
pub mod render;
pub mod scenario;

pub use cli::{Cli, Commands, OutputFormat};
pub use scenario::{ReplaySummary, Scenario, Step};

use kanban_dnd::{BoardConfig, BoardStore, DragController};
use std::path::Path;

/// Load board settings from an explicit file, or discover them in the working directory
pub fn load_config(path: Option<&Path>) -> anyhow::Result<BoardConfig> {
    let config = match path {
        Some(path) => BoardConfig::from_file(path)?,
        None => BoardConfig::load()?,
    };
    Ok(config)
}

/// Replay a scenario on a fresh board and render the result
pub fn run_replay(
    scenario: &Path,
    config: BoardConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let scenario = Scenario::load(scenario)?;
    let mut store = BoardStore::with_config(config);
    let mut drag = DragController::new();

    let summary = scenario.replay(&mut store, &mut drag);
    tracing::info!(%summary, "replay finished");

    let mut out = render::board(&store, format)?;
    if format == OutputFormat::Table {
        out.push('\n');
        out.push_str(&summary.to_string());
    }
    Ok(out)
}
