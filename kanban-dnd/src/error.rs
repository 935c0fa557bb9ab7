//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Reasons a board operation can be rejected.
///
/// A rejected operation leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Two entities of the same kind share an id
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// A task references a column that does not exist
    #[error("task '{task}' references missing column '{column}'")]
    OrphanTask { task: String, column: String },
}

impl BoardError {
    /// Create a column-not-found error
    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create a task-not-found error
    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl ToString) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.to_string(),
        }
    }

    /// True when the operation named an id the board no longer holds.
    ///
    /// These come from events racing store mutations and are expected; the
    /// other variants mean an invariant was broken.
    pub fn is_stale_reference(&self) -> bool {
        matches!(self, Self::ColumnNotFound { .. } | Self::TaskNotFound { .. })
    }
}
