//! Required artifact existence checks

use std::path::Path;

use crate::errors::{MergeError, Result};
use crate::models::{ArtifactPresence, ArtifactReport, RequiredArtifact};

/// Check every artifact under `base_dir`, preserving declaration order
pub fn check_artifacts(base_dir: &Path, artifacts: &[RequiredArtifact]) -> ArtifactReport {
    let entries = artifacts
        .iter()
        .map(|artifact| {
            let full_path = base_dir.join(&artifact.path);
            let present = full_path.is_file();
            log::debug!(
                "{} {} @ {}",
                if present { "found" } else { "missing" },
                full_path.display(),
                artifact.offset
            );
            ArtifactPresence {
                artifact: artifact.clone(),
                full_path,
                present,
            }
        })
        .collect();

    ArtifactReport { entries }
}

/// Turn a report with gaps into `MissingInputFiles`
pub fn require_all(report: &ArtifactReport) -> Result<()> {
    if report.all_present() {
        return Ok(());
    }

    Err(MergeError::MissingInputFiles(
        report.missing().into_iter().map(Path::to_path_buf).collect(),
    ))
}
