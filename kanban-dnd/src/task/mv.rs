//! MoveTask command

use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::reorder::relocate_across;
use crate::store::BoardStore;
use crate::types::{ColumnId, EntityRef, TaskId};
use kanban_dnd_operations::{Execute, Operation};
use serde::{Deserialize, Serialize};

/// Move a task onto another task or into a column.
///
/// - Over a task: the task adopts that task's column and takes its slot. Entering
///   a different column places it immediately before the target.
/// - Over a column: only the task's column changes; the board-wide task order is
///   left alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTask {
    /// The task being moved
    pub id: TaskId,
    /// What it was dropped on
    pub over: EntityRef,
}

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, over: impl Into<EntityRef>) -> Self {
        Self {
            id: id.into(),
            over: over.into(),
        }
    }

    /// Move onto another task
    pub fn onto_task(id: impl Into<TaskId>, over: impl Into<TaskId>) -> Self {
        Self::new(id, EntityRef::Task(over.into()))
    }

    /// Move into a column
    pub fn to_column(id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self::new(id, EntityRef::Column(column.into()))
    }

    fn onto(&self, store: &mut BoardStore, from: usize, over: &TaskId) -> Result<Effect> {
        let over = store
            .task_index(over)
            .ok_or_else(|| BoardError::task_not_found(over))?;

        let from_column = store.tasks[from].column_id.clone();
        let to = relocate_across(&mut store.tasks, from, over);
        let to_column = store.tasks[to].column_id.clone();

        if from == to && from_column == to_column {
            return Ok(Effect::Unchanged);
        }
        Ok(Effect::TaskMoved {
            id: self.id.clone(),
            from_column,
            to_column,
            from,
            to,
        })
    }

    fn into_column(
        &self,
        store: &mut BoardStore,
        from: usize,
        column: &ColumnId,
    ) -> Result<Effect> {
        if store.column_index(column).is_none() {
            return Err(BoardError::column_not_found(column));
        }

        let task = &mut store.tasks[from];
        if &task.column_id == column {
            return Ok(Effect::Unchanged);
        }
        let from_column = std::mem::replace(&mut task.column_id, column.clone());

        Ok(Effect::TaskMoved {
            id: self.id.clone(),
            from_column,
            to_column: column.clone(),
            from,
            to: from,
        })
    }
}

impl Operation for MoveTask {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Move a task onto another task or into a column"
    }
}

impl Execute<BoardStore, BoardError> for MoveTask {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect> {
        if self.id.as_str() == self.over.id_str() {
            return Ok(Effect::Unchanged);
        }

        let from = store
            .task_index(&self.id)
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;

        match &self.over {
            EntityRef::Task(over) => self.onto(store, from, over),
            EntityRef::Column(column) => self.into_column(store, from, column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;
    use crate::task::AddTask;

    /// Columns A="1", B="2"; tasks t1="3" (A), t2="4" (A), t3="5" (B)
    fn board() -> BoardStore {
        let mut store = BoardStore::new();
        store.apply(AddColumn::new()).unwrap();
        store.apply(AddColumn::new()).unwrap();
        store.apply(AddTask::new("1")).unwrap();
        store.apply(AddTask::new("1")).unwrap();
        store.apply(AddTask::new("2")).unwrap();
        store
    }

    fn layout(store: &BoardStore) -> Vec<(String, Vec<String>)> {
        store.snapshot().layout()
    }

    fn lanes(a: &[&str], b: &[&str]) -> Vec<(String, Vec<String>)> {
        let owned = |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect();
        vec![("1".to_string(), owned(a)), ("2".to_string(), owned(b))]
    }

    #[test]
    fn test_move_task_across_columns_lands_before_target() {
        let mut store = board();

        let effect = store.apply(MoveTask::onto_task("3", "5")).unwrap();

        assert_eq!(layout(&store), lanes(&["4"], &["3", "5"]));
        assert_eq!(
            effect,
            Effect::TaskMoved {
                id: "3".into(),
                from_column: "1".into(),
                to_column: "2".into(),
                from: 0,
                to: 1,
            }
        );
    }

    #[test]
    fn test_move_task_back_across_columns() {
        let mut store = board();

        store.apply(MoveTask::onto_task("5", "3")).unwrap();

        assert_eq!(layout(&store), lanes(&["5", "3", "4"], &[]));
    }

    #[test]
    fn test_move_task_within_column_takes_target_slot() {
        let mut store = board();

        store.apply(MoveTask::onto_task("3", "4")).unwrap();
        assert_eq!(layout(&store), lanes(&["4", "3"], &["5"]));

        store.apply(MoveTask::onto_task("3", "4")).unwrap();
        assert_eq!(layout(&store), lanes(&["3", "4"], &["5"]));
    }

    #[test]
    fn test_move_task_to_column_only_reassigns() {
        let mut store = board();
        let order_before: Vec<TaskId> = store.tasks().iter().map(|t| t.id.clone()).collect();

        let effect = store.apply(MoveTask::to_column("4", "2")).unwrap();

        let order_after: Vec<TaskId> = store.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(order_before, order_after);
        assert_eq!(layout(&store), lanes(&["3"], &["4", "5"]));
        assert!(matches!(effect, Effect::TaskMoved { from: 1, to: 1, .. }));
    }

    #[test]
    fn test_move_task_to_empty_column() {
        let mut store = board();
        store.apply(AddColumn::new()).unwrap(); // 6

        store.apply(MoveTask::to_column("3", "6")).unwrap();

        assert_eq!(store.tasks_in(&"6".into()).count(), 1);
        assert_eq!(store.task(&"3".into()).unwrap().column_id.as_str(), "6");
    }

    #[test]
    fn test_move_task_to_own_column_is_unchanged() {
        let mut store = board();
        assert_eq!(
            store.apply(MoveTask::to_column("3", "1")).unwrap(),
            Effect::Unchanged
        );
    }

    #[test]
    fn test_move_task_onto_itself_is_unchanged() {
        let mut store = board();
        let before = store.snapshot();

        let effect = store.apply(MoveTask::onto_task("4", "4")).unwrap();

        assert_eq!(effect, Effect::Unchanged);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_move_task_rejections_leave_board_untouched() {
        let mut store = board();
        let before = store.snapshot();

        assert_eq!(
            store.apply(MoveTask::onto_task("9", "3")),
            Err(BoardError::task_not_found("9"))
        );
        assert_eq!(
            store.apply(MoveTask::onto_task("3", "9")),
            Err(BoardError::task_not_found("9"))
        );
        assert_eq!(
            store.apply(MoveTask::to_column("3", "9")),
            Err(BoardError::column_not_found("9"))
        );
        assert_eq!(store.snapshot(), before);
    }
}
