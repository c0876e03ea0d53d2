//! `idf.py merge-bin` strategy

use std::path::{Path, PathBuf};

use crate::config::MergeConfig;
use crate::errors::Result;
use crate::merge::MergeStrategy;
use crate::models::MergeMethod;
use crate::utils::CommandSpec;

const IDF_HINT: &str =
    "make sure the ESP-IDF environment is set up (source ~/esp/esp-idf/export.sh) and idf.py is in PATH";

/// Delegates to the ESP-IDF build front-end, which knows the offsets from its own build
#[derive(Debug, Clone)]
pub struct IdfMergeStrategy {
    program: String,
    project_root: PathBuf,
    output: PathBuf,
}

impl IdfMergeStrategy {
    pub fn new(project_root: &Path, config: &MergeConfig) -> Self {
        Self {
            program: config.tools.idf.clone(),
            project_root: project_root.to_path_buf(),
            output: config.merged_output_in(project_root),
        }
    }
}

impl MergeStrategy for IdfMergeStrategy {
    fn method(&self) -> MergeMethod {
        MergeMethod::Idf
    }

    fn build_command(&self) -> Result<CommandSpec> {
        Ok(CommandSpec::new(&self.program)
            .arg("merge-bin")
            .current_dir(&self.project_root))
    }

    fn output_path(&self) -> &Path {
        &self.output
    }

    fn install_hint(&self) -> &str {
        IDF_HINT
    }
}
