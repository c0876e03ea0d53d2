//! Error types for esp-merge

pub mod types;

pub use types::*;
