//! Core types for the board engine

mod board;
mod ids;
mod task;

// Re-export all types
pub use board::{BoardSnapshot, Column, Lane};
pub use ids::{ColumnId, EntityKind, EntityRef, TaskId};
pub use task::Task;
