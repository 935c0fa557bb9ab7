//! Task commands

mod add;
mod mv;
mod remove;
mod rename;

pub use add::AddTask;
pub use mv::MoveTask;
pub use remove::RemoveTask;
pub use rename::RenameTask;
