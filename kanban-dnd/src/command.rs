//! The command surface of the board store and the effects commands produce

use crate::column::{AddColumn, MoveColumn, RemoveColumn, RenameColumn};
use crate::error::BoardError;
use crate::store::BoardStore;
use crate::task::{AddTask, MoveTask, RemoveTask, RenameTask};
use crate::types::{Column, ColumnId, Task, TaskId};
use kanban_dnd_operations::{Execute, Operation, Outcome};
use serde::{Deserialize, Serialize};

/// Every mutation the board accepts.
///
/// Serialized with an `op` tag, e.g. `{ op: move_task, id: "3", over: { task: "5" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddColumn(AddColumn),
    RemoveColumn(RemoveColumn),
    RenameColumn(RenameColumn),
    MoveColumn(MoveColumn),
    AddTask(AddTask),
    RemoveTask(RemoveTask),
    RenameTask(RenameTask),
    MoveTask(MoveTask),
}

macro_rules! dispatch {
    ($self:ident, $op:ident => $body:expr) => {
        match $self {
            Command::AddColumn($op) => $body,
            Command::RemoveColumn($op) => $body,
            Command::RenameColumn($op) => $body,
            Command::MoveColumn($op) => $body,
            Command::AddTask($op) => $body,
            Command::RemoveTask($op) => $body,
            Command::RenameTask($op) => $body,
            Command::MoveTask($op) => $body,
        }
    };
}

macro_rules! command_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Command {
                fn from(op: $variant) -> Self {
                    Command::$variant(op)
                }
            }
        )*
    };
}

command_from!(
    AddColumn,
    RemoveColumn,
    RenameColumn,
    MoveColumn,
    AddTask,
    RemoveTask,
    RenameTask,
    MoveTask,
);

impl Operation for Command {
    fn verb(&self) -> &'static str {
        dispatch!(self, op => op.verb())
    }

    fn noun(&self) -> &'static str {
        dispatch!(self, op => op.noun())
    }

    fn description(&self) -> &'static str {
        dispatch!(self, op => op.description())
    }
}

impl Execute<BoardStore, BoardError> for Command {
    type Output = Effect;

    fn execute(&self, store: &mut BoardStore) -> Result<Effect, BoardError> {
        dispatch!(self, op => op.execute(store))
    }
}

/// What an applied command did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    ColumnAdded {
        column: Column,
    },
    ColumnRemoved {
        column: Column,
        tasks_removed: usize,
    },
    ColumnRenamed {
        id: ColumnId,
        title: String,
    },
    ColumnMoved {
        id: ColumnId,
        from: usize,
        to: usize,
    },
    TaskAdded {
        task: Task,
    },
    TaskRemoved {
        task: Task,
    },
    TaskRenamed {
        id: TaskId,
        content: String,
    },
    /// `from`/`to` are indices in the board-wide task sequence
    TaskMoved {
        id: TaskId,
        from_column: ColumnId,
        to_column: ColumnId,
        from: usize,
        to: usize,
    },
    /// The command was valid but there was nothing to do
    Unchanged,
}

impl Effect {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl Outcome for Effect {
    fn is_change(&self) -> bool {
        !self.is_unchanged()
    }
}
