//! esp-merge - ESP32 Firmware Image Merger
//!
//! Checks that the separately-built ESP-IDF artifacts (bootloader, partition
//! table, OTA data, speech models and the application) are present and hands
//! them to `idf.py merge-bin` or `esptool merge_bin` to produce one image that
//! can be flashed at offset 0x0.

pub mod cli;
pub mod config;
pub mod errors;
pub mod merge;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use merge::{EsptoolMergeStrategy, IdfMergeStrategy, MergeStrategy};
pub use models::*;

/// esp-merge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// esp-merge application name
pub const APP_NAME: &str = "esp-merge";
