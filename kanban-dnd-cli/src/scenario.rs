//! Scenario files: scripted board commands, drag events and editing toggles.
//!
//! ```yaml
//! steps:
//!   - apply: { op: add_column }
//!   - apply: { op: add_task, column: "1" }
//!   - edit: { task: "2" }
//!   - edit: null
//!   - drag: { type: start, active: { task: "2" } }
//!   - drag: { type: over, active: { task: "2" }, over: { column: "1" } }
//!   - drag: { type: end, active: { task: "2" } }
//! ```

use std::path::Path;

use anyhow::Context;
use kanban_dnd::types::EntityRef;
use kanban_dnd::{BoardStore, Command, DragController, DragEvent, DragOutcome};
use serde::{Deserialize, Serialize};

/// A parsed scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One scripted step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Apply a command directly to the store
    Apply(Command),
    /// Feed a drag event to the controller
    Drag(DragEvent),
    /// Start editing an entity, or stop editing with `null`
    Edit(Option<EntityRef>),
}

/// Counts of what the replayed steps did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub steps: usize,
    pub applied: usize,
    pub unchanged: usize,
    pub rejected: usize,
}

impl ReplaySummary {
    fn record(&mut self, outcome: &DragOutcome) {
        match outcome {
            DragOutcome::Applied(_) => self.applied += 1,
            DragOutcome::Rejected(_) => self.rejected += 1,
            DragOutcome::Started | DragOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

impl std::fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} steps: {} applied, {} unchanged, {} rejected",
            self.steps, self.applied, self.unchanged, self.rejected
        )
    }
}

impl Scenario {
    /// Read and parse a scenario file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid scenario {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Run every step against `store`. Store rejections are counted, not fatal.
    pub fn replay(&self, store: &mut BoardStore, drag: &mut DragController) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for (index, step) in self.steps.iter().enumerate() {
            summary.steps += 1;
            match step {
                Step::Apply(command) => {
                    let outcome = DragOutcome::from(store.apply(command.clone()));
                    tracing::debug!(step = index, ?command, ?outcome, "applied command");
                    summary.record(&outcome);
                }
                Step::Drag(event) => {
                    let outcome = drag.handle(store, event);
                    tracing::debug!(step = index, ?event, ?outcome, "handled drag event");
                    summary.record(&outcome);
                }
                Step::Edit(Some(entity)) => {
                    tracing::debug!(step = index, %entity, "editing");
                    drag.begin_editing(entity.clone());
                    summary.unchanged += 1;
                }
                Step::Edit(None) => {
                    tracing::debug!(step = index, "editing finished");
                    drag.end_editing();
                    summary.unchanged += 1;
                }
            }
        }

        summary
    }
}
