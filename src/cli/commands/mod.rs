//! CLI command implementations

pub mod merge_flash;
pub mod quick;

use std::path::Path;
use std::process::ExitCode;

use crate::errors::{MergeError, Result};
use crate::merge::{check_artifacts, require_all};
use crate::models::{ArtifactReport, RequiredArtifact};
use crate::ui::report;

/// How a command run ended, independent of how it is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A merged image exists on disk
    Merged,
    /// Every attempted strategy failed; already reported to the user
    MergeFailed,
    /// Required artifacts were absent, nothing was run
    MissingInputs,
}

impl CommandOutcome {
    /// Only missing inputs are an error exit; merge failures are reported and acknowledged
    pub fn exit_code(self) -> ExitCode {
        match self {
            CommandOutcome::Merged | CommandOutcome::MergeFailed => ExitCode::SUCCESS,
            CommandOutcome::MissingInputs => ExitCode::from(1),
        }
    }
}

/// Print the artifact checklist for `build_dir`.
///
/// Fails with `MissingInputFiles` after printing the missing list, so callers
/// can stop before any tool is run.
pub fn check_inputs(build_dir: &Path, artifacts: &[RequiredArtifact]) -> Result<ArtifactReport> {
    let checked = check_artifacts(build_dir, artifacts);
    println!("{}", report::format_checklist(&checked));

    if let Err(e) = require_all(&checked) {
        log::error!("{}", e);
        if let MergeError::MissingInputFiles(files) = &e {
            println!("\n{}", report::format_missing(files));
        }
        return Err(e);
    }

    Ok(checked)
}
