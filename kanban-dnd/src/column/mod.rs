//! Column commands

mod add;
mod mv;
mod remove;
mod rename;

pub use add::AddColumn;
pub use mv::MoveColumn;
pub use remove::RemoveColumn;
pub use rename::RenameColumn;
