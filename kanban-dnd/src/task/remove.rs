//! RemoveTask command

use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::TaskId;
use kanban_dnd_operations::{Execute, Operation};
use serde::{Deserialize, Serialize};

/// Remove a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveTask {
    pub id: TaskId,
}

impl RemoveTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for RemoveTask {
    fn verb(&self) -> &'static str {
        "remove"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Remove a task from the board"
    }
}

impl Execute<BoardStore, BoardError> for RemoveTask {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect> {
        let index = store
            .task_index(&self.id)
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;
        let task = store.tasks.remove(index);
        Ok(Effect::TaskRemoved { task })
    }
}
