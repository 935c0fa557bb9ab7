//! Typed identifiers and references to draggable entities

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a column
    ColumnId
);

define_id!(
    /// Identifier of a task
    TaskId
);

/// The two kinds of draggable entity on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Column,
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => f.write_str("column"),
            Self::Task => f.write_str("task"),
        }
    }
}

/// A reference to a column or a task, as carried by drag events.
///
/// Serialized as `{ column: "<id>" }` or `{ task: "<id>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRef {
    Column(ColumnId),
    Task(TaskId),
}

impl EntityRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Column(_) => EntityKind::Column,
            Self::Task(_) => EntityKind::Task,
        }
    }

    /// The raw identifier, regardless of kind
    pub fn id_str(&self) -> &str {
        match self {
            Self::Column(id) => id.as_str(),
            Self::Task(id) => id.as_str(),
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Self::Task(_))
    }

    pub fn as_column(&self) -> Option<&ColumnId> {
        match self {
            Self::Column(id) => Some(id),
            Self::Task(_) => None,
        }
    }

    pub fn as_task(&self) -> Option<&TaskId> {
        match self {
            Self::Task(id) => Some(id),
            Self::Column(_) => None,
        }
    }
}

impl From<ColumnId> for EntityRef {
    fn from(id: ColumnId) -> Self {
        Self::Column(id)
    }
}

impl From<TaskId> for EntityRef {
    fn from(id: TaskId) -> Self {
        Self::Task(id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id_str())
    }
}
