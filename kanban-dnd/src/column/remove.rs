//! RemoveColumn command

use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::ColumnId;
use kanban_dnd_operations::{Execute, Operation};
use serde::{Deserialize, Serialize};

/// Remove a column together with every task in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveColumn {
    pub id: ColumnId,
}

impl RemoveColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for RemoveColumn {
    fn verb(&self) -> &'static str {
        "remove"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Remove a column and all of its tasks"
    }
}

impl Execute<BoardStore, BoardError> for RemoveColumn {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect> {
        let index = store
            .column_index(&self.id)
            .ok_or_else(|| BoardError::column_not_found(&self.id))?;

        let before = store.tasks.len();
        store.tasks.retain(|t| t.column_id != self.id);
        let tasks_removed = before - store.tasks.len();
        let column = store.columns.remove(index);

        Ok(Effect::ColumnRemoved {
            column,
            tasks_removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;
    use crate::task::AddTask;

    #[test]
    fn test_remove_column_cascades_to_its_tasks() {
        let mut store = BoardStore::new();
        store.apply(AddColumn::new()).unwrap(); // 1
        store.apply(AddColumn::new()).unwrap(); // 2
        store.apply(AddTask::new("1")).unwrap(); // 3
        store.apply(AddTask::new("2")).unwrap(); // 4
        store.apply(AddTask::new("1")).unwrap(); // 5
        store.apply(AddTask::new("2")).unwrap(); // 6

        let effect = store.apply(RemoveColumn::new("1")).unwrap();

        assert!(matches!(
            effect,
            Effect::ColumnRemoved { tasks_removed: 2, .. }
        ));
        assert_eq!(store.columns().len(), 1);
        let remaining: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(remaining, vec!["4", "6"]);
    }

    #[test]
    fn test_remove_missing_column_is_rejected_without_change() {
        let mut store = BoardStore::new();
        store.apply(AddColumn::new()).unwrap();
        store.apply(AddTask::new("1")).unwrap();
        let before = store.snapshot();

        let result = store.apply(RemoveColumn::new("9"));

        assert_eq!(result, Err(BoardError::column_not_found("9")));
        assert_eq!(store.snapshot(), before);
    }
}
