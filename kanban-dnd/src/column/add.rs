//! AddColumn command

use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Column, ColumnId};
use kanban_dnd_operations::{Execute, Operation};
use serde::{Deserialize, Serialize};

/// Append a new column with a fresh id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddColumn {
    /// Title; defaults to the configured placeholder ("Column {n}")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl AddColumn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Operation for AddColumn {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Append a new column to the board"
    }
}

impl Execute<BoardStore, BoardError> for AddColumn {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect> {
        let title = match &self.title {
            Some(title) => title.clone(),
            None => store.config().column_title_for(store.columns.len() + 1),
        };
        let column = Column {
            id: ColumnId::from_string(store.fresh_id()),
            title,
        };

        store.columns.push(column.clone());
        Ok(Effect::ColumnAdded { column })
    }
}
