//! Drag-driven reordering engine for an in-memory kanban board
//!
//! A board is an ordered list of columns plus one board-wide ordered list of
//! tasks. Each task belongs to exactly one column, and a column's display order
//! is the board-wide task order filtered to that column. Users reorganize the
//! board by dragging; this crate turns the drag gesture into moves.
//!
//! ## Overview
//!
//! - **Single mutation entry point** - every change is a [`Command`] applied
//!   through [`BoardStore::apply`]
//! - **Live task moves** - tasks follow the pointer during drag-over, across
//!   columns too
//! - **Columns at drop** - columns only move when the drag ends on a target
//! - **Stale-safe** - events naming deleted entities are rejected without
//!   touching the board
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_dnd::{BoardStore, DragController, DragEvent};
//! use kanban_dnd::column::AddColumn;
//! use kanban_dnd::task::AddTask;
//! use kanban_dnd::types::{ColumnId, TaskId};
//!
//! let mut store = BoardStore::new();
//! store.apply(AddColumn::new()).unwrap(); // "1"
//! store.apply(AddColumn::new()).unwrap(); // "2"
//! store.apply(AddTask::new("1")).unwrap(); // "3"
//!
//! let mut drag = DragController::new();
//! let task = TaskId::from("3");
//! drag.handle(&mut store, &DragEvent::start(task.clone()));
//! drag.handle(&mut store, &DragEvent::over(task.clone(), ColumnId::from("2")));
//! drag.handle(&mut store, &DragEvent::end_outside(task));
//!
//! assert_eq!(store.task_count(&ColumnId::from("2")), 1);
//! ```

mod error;
mod store;

pub mod command;
pub mod config;
pub mod drag;
pub mod id_generator;
pub mod reorder;
pub mod types;

// Command modules
pub mod column;
pub mod task;

// Re-export Execute trait and types from operations crate
pub use kanban_dnd_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

pub use command::{Command, Effect};
pub use config::{BoardConfig, ConfigError, ConfigResult};
pub use drag::{DragController, DragEvent, DragOutcome, DragSession, Overlay};
pub use error::{BoardError, Result};
pub use id_generator::{IdGenerator, IdStrategy, SequentialIds, UlidIds};
pub use store::BoardStore;
