//! Command Line Interface module
//!
//! Argument parsing and the two command runners shared by the `merge-flash`
//! and `quick-merge` binaries.

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::CommandOutcome;
