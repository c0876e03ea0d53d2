//! ESP-IDF `flasher_args.json` descriptor
//!
//! Written by `idf.py build` into the build directory. Only the keys needed to
//! rebuild an esptool `merge_bin` command line are modelled here; everything
//! else in the file is ignored.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{MergeError, Result};
use crate::models::artifact::{FlashOffset, RequiredArtifact};

/// File name of the descriptor inside the build directory
pub const FLASHER_ARGS_FILE: &str = "flasher_args.json";

/// Parsed `flasher_args.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlasherConfig {
    /// Offset to file mapping, kept in the order it is declared
    #[serde(default, deserialize_with = "ordered_flash_files")]
    pub flash_files: Vec<(FlashOffset, PathBuf)>,

    /// Flat list of flash flags, e.g. `["--flash_mode", "dio", ...]`
    #[serde(default)]
    pub write_flash_args: Vec<String>,

    #[serde(default)]
    pub flash_settings: Option<FlasherFlashSettings>,

    #[serde(default)]
    pub extra_esptool_args: Option<ExtraEsptoolArgs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlasherFlashSettings {
    pub flash_mode: Option<String>,
    pub flash_size: Option<String>,
    pub flash_freq: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtraEsptoolArgs {
    pub chip: Option<String>,
}

impl FlasherConfig {
    /// Read and parse the descriptor at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MergeError::FlasherConfigMissing(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|e| MergeError::FlasherConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        log::debug!(
            "Loaded {} with {} flash file(s)",
            path.display(),
            config.flash_files.len()
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Target chip recorded by the build, if any
    pub fn chip(&self) -> Option<&str> {
        self.extra_esptool_args
            .as_ref()
            .and_then(|extra| extra.chip.as_deref())
    }

    /// Flash files as artifacts, in declaration order
    pub fn artifacts(&self) -> Vec<RequiredArtifact> {
        self.flash_files
            .iter()
            .map(|(offset, path)| RequiredArtifact {
                path: path.clone(),
                offset: *offset,
            })
            .collect()
    }
}

/// Deserialize a JSON object into `(offset, path)` pairs without losing key order
fn ordered_flash_files<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(FlashOffset, PathBuf)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlashFilesVisitor;

    impl<'de> Visitor<'de> for FlashFilesVisitor {
        type Value = Vec<(FlashOffset, PathBuf)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of flash offsets to file names")
        }

        fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut files = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((offset, file)) = map.next_entry::<String, PathBuf>()? {
                let offset = offset
                    .parse::<FlashOffset>()
                    .map_err(serde::de::Error::custom)?;
                files.push((offset, file));
            }
            Ok(files)
        }
    }

    deserializer.deserialize_map(FlashFilesVisitor)
}
