//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{execute, CommandResult};
pub use platform::is_ci;
