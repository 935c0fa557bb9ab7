//! # kanban-dnd operations
//!
//! This crate provides the `Operation` trait for describing board mutations and
//! the `OperationProcessor` that runs them. Operations are structs where the
//! fields ARE the parameters; the processor turns every execution into an
//! `ExecutionResult` and hands the resulting `LogEntry` to the context.
//!
//! ## Example
//!
//! ```ignore
//! use kanban_dnd_operations::*;
//!
//! #[derive(Debug, Serialize)]
//! pub struct RenameTask {
//!     pub id: TaskId,
//!     pub content: String,
//! }
//!
//! impl Operation for RenameTask {
//!     fn verb(&self) -> &'static str { "rename" }
//!     fn noun(&self) -> &'static str { "task" }
//!     fn description(&self) -> &'static str { "Replace a task's content" }
//! }
//!
//! impl Execute<BoardStore, BoardError> for RenameTask {
//!     type Output = Effect;
//!     fn execute(&self, store: &mut BoardStore) -> Result<Effect, BoardError> {
//!         // mutate the store, or reject without touching it
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation, Outcome};
pub use processor::{LogSink, OperationProcessor};

// Re-export for use in implementations
pub use serde_json::Value;
