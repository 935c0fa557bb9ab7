//! MoveColumn command

use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::reorder::relocate;
use crate::store::BoardStore;
use crate::types::ColumnId;
use kanban_dnd_operations::{Execute, Operation};
use serde::{Deserialize, Serialize};

/// Move a column to the position currently held by another column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveColumn {
    /// The column being moved
    pub id: ColumnId,
    /// The column whose position it takes
    pub over: ColumnId,
}

impl MoveColumn {
    pub fn new(id: impl Into<ColumnId>, over: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            over: over.into(),
        }
    }
}

impl Operation for MoveColumn {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Move a column to another column's position"
    }
}

impl Execute<BoardStore, BoardError> for MoveColumn {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect> {
        if self.id == self.over {
            return Ok(Effect::Unchanged);
        }

        let from = store
            .column_index(&self.id)
            .ok_or_else(|| BoardError::column_not_found(&self.id))?;
        let to = store
            .column_index(&self.over)
            .ok_or_else(|| BoardError::column_not_found(&self.over))?;

        relocate(&mut store.columns, from, to);

        Ok(Effect::ColumnMoved {
            id: self.id.clone(),
            from,
            to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;
    use crate::task::AddTask;

    fn store_with_columns(n: usize) -> BoardStore {
        let mut store = BoardStore::new();
        for _ in 0..n {
            store.apply(AddColumn::new()).unwrap();
        }
        store
    }

    fn order(store: &BoardStore) -> Vec<&str> {
        store.columns().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_move_column_forward_and_back() {
        let mut store = store_with_columns(4);

        let effect = store.apply(MoveColumn::new("1", "3")).unwrap();
        assert_eq!(
            effect,
            Effect::ColumnMoved {
                id: "1".into(),
                from: 0,
                to: 2
            }
        );
        assert_eq!(order(&store), vec!["2", "3", "1", "4"]);

        store.apply(MoveColumn::new("4", "2")).unwrap();
        assert_eq!(order(&store), vec!["4", "2", "3", "1"]);
    }

    #[test]
    fn test_move_column_keeps_tasks_attached() {
        let mut store = store_with_columns(2);
        store.apply(AddTask::new("1")).unwrap();
        let tasks_before = store.tasks().to_vec();

        store.apply(MoveColumn::new("2", "1")).unwrap();

        assert_eq!(order(&store), vec!["2", "1"]);
        assert_eq!(store.tasks(), tasks_before.as_slice());
    }

    #[test]
    fn test_move_column_onto_itself_is_unchanged() {
        let mut store = store_with_columns(3);
        let before = store.snapshot();

        let effect = store.apply(MoveColumn::new("2", "2")).unwrap();

        assert_eq!(effect, Effect::Unchanged);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_move_column_with_missing_ids() {
        let mut store = store_with_columns(2);
        let before = store.snapshot();

        assert_eq!(
            store.apply(MoveColumn::new("7", "1")),
            Err(BoardError::column_not_found("7"))
        );
        assert_eq!(
            store.apply(MoveColumn::new("1", "7")),
            Err(BoardError::column_not_found("7"))
        );
        assert_eq!(store.snapshot(), before);
    }
}
