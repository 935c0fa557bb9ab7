//! Board-level types: Column, Lane, BoardSnapshot

use super::ids::ColumnId;
use super::task::Task;
use serde::{Deserialize, Serialize};

/// A column groups tasks into a workflow stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A column together with its tasks in display order, borrowed from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane<'a> {
    pub column: &'a Column,
    pub tasks: Vec<&'a Task>,
}

impl Lane<'_> {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Owned copy of the board contents, for rendering or serialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl BoardSnapshot {
    /// Tasks of `column` in display order
    pub fn tasks_in<'a>(&'a self, column: &'a ColumnId) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| &t.column_id == column)
    }

    /// Task ids per column, in column order. Handy for asserting layouts.
    pub fn layout(&self) -> Vec<(String, Vec<String>)> {
        self.columns
            .iter()
            .map(|c| {
                let tasks = self
                    .tasks_in(&c.id)
                    .map(|t| t.id.to_string())
                    .collect();
                (c.id.to_string(), tasks)
            })
            .collect()
    }
}
