//! AddTask command

use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{ColumnId, Task, TaskId};
use kanban_dnd_operations::{Execute, Operation};
use serde::{Deserialize, Serialize};

/// Append a new task to a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTask {
    /// The owning column; must exist
    pub column: ColumnId,
    /// Content; defaults to the configured placeholder ("Task {n}")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl AddTask {
    pub fn new(column: impl Into<ColumnId>) -> Self {
        Self {
            column: column.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Append a new task to a column"
    }
}

impl Execute<BoardStore, BoardError> for AddTask {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect> {
        if store.column_index(&self.column).is_none() {
            return Err(BoardError::column_not_found(&self.column));
        }

        let content = match &self.content {
            Some(content) => content.clone(),
            None => store.config().task_content_for(store.tasks.len() + 1),
        };
        let task = Task {
            id: TaskId::from_string(store.fresh_id()),
            column_id: self.column.clone(),
            content,
        };

        store.tasks.push(task.clone());
        Ok(Effect::TaskAdded { task })
    }
}
