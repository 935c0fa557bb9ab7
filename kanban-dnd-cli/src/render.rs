//! Rendering boards and settings in the selected output format.

use comfy_table::{presets::UTF8_FULL, Table};
use kanban_dnd::{BoardConfig, BoardStore};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render the board: one table column per board column, tasks top to bottom.
pub fn board(store: &BoardStore, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(board_table(store)),
        OutputFormat::Yaml => structured(&store.snapshot(), format),
        OutputFormat::Json => structured(&store.snapshot(), format),
    }
}

/// Render the effective configuration
pub fn config(config: &BoardConfig, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return structured(config, format);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["column_title", config.column_title.as_str()]);
    table.add_row(vec!["task_content", config.task_content.as_str()]);
    table.add_row(vec!["ids".to_string(), config.ids.to_string()]);
    table.add_row(vec![
        "activity_limit".to_string(),
        config.activity_limit.to_string(),
    ]);
    table.add_row(vec!["actor", config.actor.as_deref().unwrap_or("-")]);
    Ok(table.to_string())
}

fn board_table(store: &BoardStore) -> String {
    let lanes = store.lanes();
    if lanes.is_empty() {
        return "No columns.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(
        lanes
            .iter()
            .map(|lane| {
                let column = lane.column;
                format!("{} [{}] ({})", column.title, column.id, lane.task_count())
            })
            .collect::<Vec<_>>(),
    );

    let depth = lanes.iter().map(|lane| lane.task_count()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(
            lanes
                .iter()
                .map(|lane| {
                    lane.tasks
                        .get(row)
                        .map(|task| format!("[{}] {}", task.id, task.content))
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>(),
        );
    }
    table.to_string()
}

fn structured<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        _ => Ok(serde_yaml_ng::to_string(value)?),
    }
}
