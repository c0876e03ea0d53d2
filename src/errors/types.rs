//! Custom error types for esp-merge

use std::fmt;
use std::path::PathBuf;

/// Main error type for merge operations
#[derive(Debug)]
pub enum MergeError {
    /// One or more required artifacts are absent
    MissingInputFiles(Vec<PathBuf>),
    /// External tool could not be resolved or spawned
    ToolNotFound { tool: String, hint: String },
    /// External tool ran but exited non-zero
    ToolFailed {
        tool: String,
        status: Option<i32>,
        details: String,
    },
    /// `flasher_args.json` does not exist
    FlasherConfigMissing(PathBuf),
    /// `flasher_args.json` exists but could not be parsed
    FlasherConfigInvalid { path: PathBuf, reason: String },
    /// esp-merge configuration errors
    Config(String),
    /// General I/O errors
    Io(std::io::Error),
}

impl MergeError {
    /// Build a `ToolFailed` from a finished process, preferring stderr for details
    pub fn tool_failed(tool: &str, status: Option<i32>, stdout: &str, stderr: &str) -> Self {
        let details = if stderr.trim().is_empty() {
            stdout.to_string()
        } else {
            stderr.to_string()
        };

        MergeError::ToolFailed {
            tool: tool.to_string(),
            status,
            details,
        }
    }
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::MissingInputFiles(files) => {
                write!(f, "{} required file(s) missing", files.len())
            }
            MergeError::ToolNotFound { tool, hint } => {
                write!(f, "{} not found: {}", tool, hint)
            }
            MergeError::ToolFailed { tool, status, .. } => match status {
                Some(code) => write!(f, "{} exited with status {}", tool, code),
                None => write!(f, "{} was terminated by a signal", tool),
            },
            MergeError::FlasherConfigMissing(path) => {
                write!(f, "flasher arguments not found: {}", path.display())
            }
            MergeError::FlasherConfigInvalid { path, reason } => {
                write!(f, "invalid flasher arguments in {}: {}", path.display(), reason)
            }
            MergeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MergeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for MergeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MergeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MergeError {
    fn from(err: std::io::Error) -> Self {
        MergeError::Io(err)
    }
}

impl From<toml::de::Error> for MergeError {
    fn from(err: toml::de::Error) -> Self {
        MergeError::Config(err.to_string())
    }
}

/// Result type alias for merge operations
pub type Result<T> = std::result::Result<T, MergeError>;
