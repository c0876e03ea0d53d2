//! Data models used throughout esp-merge

pub mod artifact;
pub mod flasher_args;
pub mod merge;

// Re-export commonly used types
pub use artifact::*;
pub use flasher_args::*;
pub use merge::*;
