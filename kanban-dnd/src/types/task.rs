//! Task type

use super::ids::{ColumnId, TaskId};
use crate::reorder::Contained;
use serde::{Deserialize, Serialize};

/// A task/card on the board.
///
/// Display order is the task's position in the board's task sequence; tasks of a
/// column are the subsequence whose `column_id` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        column_id: impl Into<ColumnId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            content: content.into(),
        }
    }
}

impl Contained for Task {
    type Container = ColumnId;

    fn container(&self) -> &ColumnId {
        &self.column_id
    }

    fn set_container(&mut self, container: ColumnId) {
        self.column_id = container;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serialization() {
        let task = Task::new("3", "1", "Task 1");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "3", "column_id": "1", "content": "Task 1"})
        );
    }

    #[test]
    fn test_set_container() {
        let mut task = Task::new("3", "1", "Task 1");
        task.set_container(ColumnId::from("2"));
        assert_eq!(task.column_id.as_str(), "2");
    }
}
