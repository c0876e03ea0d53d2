//! Merge configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{MergeError, Result};
use crate::models::{FlashSettings, RequiredArtifact, default_artifacts};

/// Optional per-project override file, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "esp-merge.toml";

/// Main merge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Build directory, relative to the project root
    pub build_dir: PathBuf,
    /// Flash parameters
    pub flash: FlashSettings,
    /// Tool invocation configuration
    pub tools: ToolConfig,
    /// Output file names inside the build directory
    pub output: OutputConfig,
    /// Baud rate suggested in the flashing instructions
    pub flash_baud: u32,
    /// Required artifacts in flashing order
    pub artifacts: Vec<RequiredArtifact>,
}

/// External tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Python interpreter used to run `-m esptool`
    pub python: String,
    /// ESP-IDF front-end command
    pub idf: String,
}

/// Output naming configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Image produced by `idf.py merge-bin` and by the fixed esptool layout
    pub merged: String,
    /// Image produced from flasher_args.json
    pub manual: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("build"),
            flash: FlashSettings::default(),
            tools: ToolConfig::default(),
            output: OutputConfig::default(),
            flash_baud: 921600,
            artifacts: default_artifacts(),
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            python: "python".to_string(),
            idf: "idf.py".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            merged: "merged-binary.bin".to_string(),
            manual: "merged-binary-manual.bin".to_string(),
        }
    }
}

impl MergeConfig {
    /// Load `esp-merge.toml` from `project_root`, falling back to defaults when absent
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!(
                "No {} in {}, using defaults",
                CONFIG_FILE_NAME,
                project_root.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.artifacts.is_empty() {
            return Err(MergeError::Config(
                "at least one artifact must be listed".to_string(),
            ));
        }
        if self.output.merged.trim().is_empty() || self.output.manual.trim().is_empty() {
            return Err(MergeError::Config(
                "output file names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute build directory for a project root
    pub fn build_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.build_dir)
    }

    /// Output path of `idf.py merge-bin` and the fixed esptool layout
    pub fn merged_output_in(&self, project_root: &Path) -> PathBuf {
        self.build_dir_in(project_root).join(&self.output.merged)
    }

    /// Output path of the flasher_args.json driven merge
    pub fn manual_output_in(&self, project_root: &Path) -> PathBuf {
        self.build_dir_in(project_root).join(&self.output.manual)
    }
}
