//! Direct `python -m esptool` merge strategy

use std::path::{Path, PathBuf};

use crate::config::MergeConfig;
use crate::errors::{MergeError, Result};
use crate::merge::{MergeStrategy, run_tool};
use crate::models::{
    FLASHER_ARGS_FILE, FlashSettings, FlasherConfig, MergeMethod, MergedImage, RequiredArtifact,
};
use crate::utils::{CommandRunner, CommandSpec};

const ESPTOOL_HINT: &str = "install esptool with: pip install esptool";
const MISSING_MODULE_MARKER: &str = "No module named esptool";

/// Where the offset/file pairs come from
#[derive(Debug, Clone)]
pub enum EsptoolLayout {
    /// Known artifact list with explicit flash parameters
    Fixed {
        flash: FlashSettings,
        artifacts: Vec<RequiredArtifact>,
    },
    /// `flasher_args.json` written by the ESP-IDF build; `fallback` fills what it omits
    Descriptor {
        flasher_args: PathBuf,
        fallback: FlashSettings,
    },
}

/// Calls esptool's `merge_bin` with an explicit offset/file list
#[derive(Debug, Clone)]
pub struct EsptoolMergeStrategy {
    python: String,
    build_dir: PathBuf,
    output: PathBuf,
    layout: EsptoolLayout,
}

impl EsptoolMergeStrategy {
    /// Fixed layout from configuration, written to the standard merged image path
    pub fn fixed(project_root: &Path, config: &MergeConfig) -> Self {
        Self {
            python: config.tools.python.clone(),
            build_dir: config.build_dir_in(project_root),
            output: config.merged_output_in(project_root),
            layout: EsptoolLayout::Fixed {
                flash: config.flash.clone(),
                artifacts: config.artifacts.clone(),
            },
        }
    }

    /// Layout read from the build's flasher_args.json, written to the manual image path
    pub fn from_flasher_args(project_root: &Path, config: &MergeConfig) -> Self {
        let build_dir = config.build_dir_in(project_root);
        Self {
            python: config.tools.python.clone(),
            output: config.manual_output_in(project_root),
            layout: EsptoolLayout::Descriptor {
                flasher_args: build_dir.join(FLASHER_ARGS_FILE),
                fallback: config.flash.clone(),
            },
            build_dir,
        }
    }

    fn base_command(&self) -> CommandSpec {
        CommandSpec::new(&self.python).args(["-m", "esptool"])
    }

    fn push_pairs(&self, mut spec: CommandSpec, pairs: &[RequiredArtifact]) -> CommandSpec {
        for artifact in pairs {
            spec = spec
                .arg(artifact.offset.to_string())
                .arg(self.build_dir.join(&artifact.path).display().to_string());
        }
        spec
    }

    fn fixed_command(&self, flash: &FlashSettings, artifacts: &[RequiredArtifact]) -> CommandSpec {
        let spec = self
            .base_command()
            .args(["--chip", flash.chip.as_str(), "merge-bin"])
            .args(["--flash-mode", flash.flash_mode.as_str()])
            .args(["--flash-freq", flash.flash_freq.as_str()])
            .args(["--flash-size", flash.flash_size.as_str()])
            .arg("-o")
            .arg(self.output.display().to_string());
        self.push_pairs(spec, artifacts)
    }

    fn descriptor_command(
        &self,
        flasher_args: &Path,
        fallback: &FlashSettings,
    ) -> Result<CommandSpec> {
        let descriptor = FlasherConfig::load(flasher_args)?;
        if descriptor.flash_files.is_empty() {
            return Err(MergeError::FlasherConfigInvalid {
                path: flasher_args.to_path_buf(),
                reason: "flash_files is empty".to_string(),
            });
        }

        let chip = descriptor.chip().unwrap_or(&fallback.chip);
        let mut spec = self.base_command().args(["--chip", chip, "merge_bin"]);

        if descriptor.write_flash_args.is_empty() {
            let settings = descriptor.flash_settings.clone().unwrap_or_default();
            spec = spec
                .args([
                    "--flash_mode",
                    settings.flash_mode.as_deref().unwrap_or(&fallback.flash_mode),
                ])
                .args([
                    "--flash_freq",
                    settings.flash_freq.as_deref().unwrap_or(&fallback.flash_freq),
                ])
                .args([
                    "--flash_size",
                    settings.flash_size.as_deref().unwrap_or(&fallback.flash_size),
                ]);
        } else {
            spec = spec.args(descriptor.write_flash_args.iter().cloned());
        }

        spec = spec.arg("-o").arg(self.output.display().to_string());
        Ok(self.push_pairs(spec, &descriptor.artifacts()))
    }
}

impl MergeStrategy for EsptoolMergeStrategy {
    fn method(&self) -> MergeMethod {
        MergeMethod::Esptool
    }

    fn build_command(&self) -> Result<CommandSpec> {
        match &self.layout {
            EsptoolLayout::Fixed { flash, artifacts } => Ok(self.fixed_command(flash, artifacts)),
            EsptoolLayout::Descriptor {
                flasher_args,
                fallback,
            } => self.descriptor_command(flasher_args, fallback),
        }
    }

    fn output_path(&self) -> &Path {
        &self.output
    }

    fn install_hint(&self) -> &str {
        ESPTOOL_HINT
    }

    fn produce_merged_image(&self, runner: &dyn CommandRunner) -> Result<MergedImage> {
        let spec = self.build_command()?;
        // An interpreter without the esptool package is a missing tool, not a failed merge
        run_tool(runner, &spec, ESPTOOL_HINT).map_err(|err| match err {
            MergeError::ToolFailed { ref details, .. }
                if details.contains(MISSING_MODULE_MARKER) =>
            {
                MergeError::ToolNotFound {
                    tool: "esptool".to_string(),
                    hint: ESPTOOL_HINT.to_string(),
                }
            }
            other => other,
        })?;
        Ok(MergedImage::inspect(self.output.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_command_layout() {
        let strategy = EsptoolMergeStrategy::fixed(Path::new("proj"), &MergeConfig::default());
        let spec = strategy.build_command().unwrap();

        assert_eq!(spec.program, "python");
        assert_eq!(
            &spec.args[..14],
            &[
                "-m",
                "esptool",
                "--chip",
                "esp32s3",
                "merge-bin",
                "--flash-mode",
                "dio",
                "--flash-freq",
                "80m",
                "--flash-size",
                "16MB",
                "-o",
                "proj/build/merged-binary.bin",
                "0x0",
            ]
        );
        // 5 offset/file pairs after the output path
        assert_eq!(spec.args.len(), 13 + 10);
        assert_eq!(spec.args.last().unwrap(), "proj/build/xiaozhi.bin");
    }

    #[test]
    fn test_descriptor_missing_is_reported() {
        let strategy = EsptoolMergeStrategy::from_flasher_args(
            Path::new("/nonexistent"),
            &MergeConfig::default(),
        );
        match strategy.build_command() {
            Err(MergeError::FlasherConfigMissing(path)) => {
                assert!(path.ends_with("build/flasher_args.json"));
            }
            other => panic!("Expected FlasherConfigMissing, got: {:?}", other),
        }
    }
}
