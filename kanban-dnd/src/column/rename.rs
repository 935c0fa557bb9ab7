//! RenameColumn command

use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::ColumnId;
use kanban_dnd_operations::{Execute, Operation};
use serde::{Deserialize, Serialize};

/// Replace a column's title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameColumn {
    pub id: ColumnId,
    pub title: String,
}

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Operation for RenameColumn {
    fn verb(&self) -> &'static str {
        "rename"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Replace a column's title"
    }
}

impl Execute<BoardStore, BoardError> for RenameColumn {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect> {
        let column = store
            .columns
            .iter_mut()
            .find(|c| c.id == self.id)
            .ok_or_else(|| BoardError::column_not_found(&self.id))?;

        if column.title == self.title {
            return Ok(Effect::Unchanged);
        }
        column.title = self.title.clone();

        Ok(Effect::ColumnRenamed {
            id: self.id.clone(),
            title: self.title.clone(),
        })
    }
}
