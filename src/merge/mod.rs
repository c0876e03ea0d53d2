//! Merge strategies
//!
//! Both strategies hand the actual merging to an external tool. They differ
//! only in which tool is called and where the offset/file list comes from.

pub mod checker;
pub mod esptool;
pub mod idf;
pub mod selector;

pub use checker::{check_artifacts, require_all};
pub use esptool::{EsptoolLayout, EsptoolMergeStrategy};
pub use idf::IdfMergeStrategy;
pub use selector::{FallbackOutcome, run_with_fallback};

use std::io;
use std::path::Path;

use crate::errors::{MergeError, Result};
use crate::models::{MergeMethod, MergedImage};
use crate::utils::{CommandOutput, CommandRunner, CommandSpec};

/// Produces one merged flash image
pub trait MergeStrategy {
    fn method(&self) -> MergeMethod;

    /// Command line that performs the merge
    fn build_command(&self) -> Result<CommandSpec>;

    /// Where the tool writes the merged image
    fn output_path(&self) -> &Path;

    /// Remediation shown when the tool cannot be found
    fn install_hint(&self) -> &str;

    /// Run the merge and inspect the resulting image
    fn produce_merged_image(&self, runner: &dyn CommandRunner) -> Result<MergedImage> {
        let spec = self.build_command()?;
        run_tool(runner, &spec, self.install_hint())?;
        Ok(MergedImage::inspect(self.output_path().to_path_buf()))
    }
}

/// Run `spec` and classify the outcome into the merge error kinds
pub fn run_tool(
    runner: &dyn CommandRunner,
    spec: &CommandSpec,
    install_hint: &str,
) -> Result<CommandOutput> {
    log::info!("Executing: {}", spec.display());

    let output = runner.run(spec).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            log::warn!("{} unavailable: {}", spec.program, e);
            MergeError::ToolNotFound {
                tool: spec.program.clone(),
                hint: install_hint.to_string(),
            }
        }
        _ => MergeError::Io(e),
    })?;

    if !output.success {
        log::error!("{} failed with status {:?}", spec.program, output.code);
        return Err(MergeError::tool_failed(
            &spec.program,
            output.code,
            &output.stdout,
            &output.stderr,
        ));
    }

    log::debug!("{} finished successfully", spec.program);
    Ok(output)
}
