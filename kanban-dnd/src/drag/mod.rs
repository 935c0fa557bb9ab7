//! Drag-driven reordering: events, session state, and the controller that
//! turns events into board commands

mod controller;
mod event;
mod session;

pub use controller::{DragController, DragOutcome};
pub use event::DragEvent;
pub use session::{DragSession, Overlay};
