//! Build artifacts and their flash placement

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Byte address in the device flash where a binary is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlashOffset(pub u32);

impl FlashOffset {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FlashOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl FromStr for FlashOffset {
    type Err = String;

    /// Accepts `0x`-prefixed hex (as esptool and flasher_args.json write it) or plain decimal
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => trimmed.parse::<u32>(),
        };
        parsed
            .map(FlashOffset)
            .map_err(|e| format!("invalid flash offset '{}': {}", s, e))
    }
}

impl Serialize for FlashOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FlashOffset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A binary that must exist before merging, with the offset it is written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredArtifact {
    /// Path relative to the build directory
    pub path: PathBuf,
    /// Target flash offset
    pub offset: FlashOffset,
}

impl RequiredArtifact {
    pub fn new(offset: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: FlashOffset(offset),
        }
    }
}

/// The standard ESP-IDF layout for this firmware, in flashing order
pub fn default_artifacts() -> Vec<RequiredArtifact> {
    vec![
        RequiredArtifact::new(0x0, "bootloader/bootloader.bin"),
        RequiredArtifact::new(0x8000, "partition_table/partition-table.bin"),
        RequiredArtifact::new(0xd000, "ota_data_initial.bin"),
        RequiredArtifact::new(0x10000, "srmodels/srmodels.bin"),
        RequiredArtifact::new(0x100000, "xiaozhi.bin"),
    ]
}

/// Presence of one artifact on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPresence {
    pub artifact: RequiredArtifact,
    /// Path as it was checked (base directory joined with the relative path)
    pub full_path: PathBuf,
    pub present: bool,
}

/// Outcome of checking every required artifact
#[derive(Debug, Clone, Default)]
pub struct ArtifactReport {
    pub entries: Vec<ArtifactPresence>,
}

impl ArtifactReport {
    pub fn all_present(&self) -> bool {
        self.entries.iter().all(|entry| entry.present)
    }

    /// Missing paths in declaration order
    pub fn missing(&self) -> Vec<&Path> {
        self.entries
            .iter()
            .filter(|entry| !entry.present)
            .map(|entry| entry.full_path.as_path())
            .collect()
    }

    pub fn missing_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.present).count()
    }
}
