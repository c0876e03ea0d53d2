//! User-facing output and prompts

pub mod prompt;
pub mod report;
