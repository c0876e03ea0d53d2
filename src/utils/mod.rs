//! Utility functions and helpers used throughout esp-merge

pub mod logging;
pub mod process;
pub mod project_root;

pub use process::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};
pub use project_root::resolve_project_root;
