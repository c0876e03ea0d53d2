//! Merge parameters and results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::errors::MergeError;

/// How the merged image is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MergeMethod {
    /// Let `idf.py merge-bin` derive offsets from the build (default)
    Idf,
    /// Call `esptool merge_bin` directly with offsets from flasher_args.json
    Esptool,
}

impl MergeMethod {
    /// The other method, offered when this one fails
    pub fn alternate(self) -> Self {
        match self {
            MergeMethod::Idf => MergeMethod::Esptool,
            MergeMethod::Esptool => MergeMethod::Idf,
        }
    }

    pub fn tool_name(self) -> &'static str {
        match self {
            MergeMethod::Idf => "idf.py",
            MergeMethod::Esptool => "esptool",
        }
    }
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeMethod::Idf => write!(f, "idf"),
            MergeMethod::Esptool => write!(f, "esptool"),
        }
    }
}

/// Flash parameters passed to esptool and shown in flashing instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashSettings {
    /// Target chip (e.g., "esp32s3")
    pub chip: String,
    /// Flash mode (e.g., "dio", "qio")
    pub flash_mode: String,
    /// Flash frequency (e.g., "80m", "40m")
    pub flash_freq: String,
    /// Flash size (e.g., "16MB", "8MB", "4MB")
    pub flash_size: String,
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self {
            chip: "esp32s3".to_string(),
            flash_mode: "dio".to_string(),
            flash_freq: "80m".to_string(),
            flash_size: "16MB".to_string(),
        }
    }
}

/// Image written by a successful merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedImage {
    pub path: PathBuf,
    /// Size on disk; `None` when the tool reported success but left no file
    pub size: Option<u64>,
}

impl MergedImage {
    /// Stat `path` after the tool has exited successfully
    pub fn inspect(path: PathBuf) -> Self {
        let size = std::fs::metadata(&path)
            .ok()
            .filter(|meta| meta.is_file())
            .map(|meta| meta.len());
        Self { path, size }
    }

    pub fn exists(&self) -> bool {
        self.size.is_some()
    }
}

/// Summary of one merge attempt, as presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub success: bool,
    pub output_path: Option<PathBuf>,
    pub output_size: Option<u64>,
    pub error: Option<String>,
    pub warning: Option<String>,
}

impl MergeResult {
    pub fn from_outcome(outcome: &Result<MergedImage, MergeError>) -> Self {
        match outcome {
            Ok(image) if image.exists() => Self {
                success: true,
                output_path: Some(image.path.clone()),
                output_size: image.size,
                error: None,
                warning: None,
            },
            Ok(image) => Self {
                success: true,
                output_path: Some(image.path.clone()),
                output_size: None,
                error: None,
                warning: Some(format!(
                    "command succeeded but {} was not found",
                    image.path.display()
                )),
            },
            Err(err) => Self {
                success: false,
                output_path: None,
                output_size: None,
                error: Some(err.to_string()),
                warning: None,
            },
        }
    }

    /// A merge counts as usable only when the image is actually on disk
    pub fn has_image(&self) -> bool {
        self.success && self.output_size.is_some()
    }
}
