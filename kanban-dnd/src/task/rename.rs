//! RenameTask command

use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::TaskId;
use kanban_dnd_operations::{Execute, Operation};
use serde::{Deserialize, Serialize};

/// Replace a task's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTask {
    pub id: TaskId,
    pub content: String,
}

impl RenameTask {
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

impl Operation for RenameTask {
    fn verb(&self) -> &'static str {
        "rename"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Replace a task's content"
    }
}

impl Execute<BoardStore, BoardError> for RenameTask {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect> {
        let task = store
            .tasks
            .iter_mut()
            .find(|t| t.id == self.id)
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;

        if task.content == self.content {
            return Ok(Effect::Unchanged);
        }
        task.content = self.content.clone();

        Ok(Effect::TaskRenamed {
            id: self.id.clone(),
            content: self.content.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;
    use crate::task::AddTask;

    #[test]
    fn test_rename_task_keeps_position_and_column() {
        let mut store = BoardStore::new();
        store.apply(AddColumn::new()).unwrap();
        store.apply(AddTask::new("1")).unwrap(); // 2
        store.apply(AddTask::new("1")).unwrap(); // 3

        store
            .apply(RenameTask::new("2", "Ship it\nwith notes"))
            .unwrap();

        let task = &store.tasks()[0];
        assert_eq!(task.id.as_str(), "2");
        assert_eq!(task.column_id.as_str(), "1");
        assert_eq!(task.content, "Ship it\nwith notes");
    }

    #[test]
    fn test_rename_missing_task() {
        let mut store = BoardStore::new();
        assert!(matches!(
            store.apply(RenameTask::new("1", "x")),
            Err(BoardError::TaskNotFound { .. })
        ));
    }
}
