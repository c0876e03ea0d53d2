//! Test fixtures for esp-merge testing
//!
//! Builds fake ESP-IDF project trees in temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Standard artifact paths relative to `build/`
pub const ARTIFACTS: [&str; 5] = [
    "bootloader/bootloader.bin",
    "partition_table/partition-table.bin",
    "ota_data_initial.bin",
    "srmodels/srmodels.bin",
    "xiaozhi.bin",
];

/// `flasher_args.json` as written by an ESP32-S3 build of this firmware
pub const FLASHER_ARGS_JSON: &str = r#"{
    "write_flash_args" : [ "--flash_mode", "dio",
                           "--flash_size", "16MB",
                           "--flash_freq", "80m" ],
    "flash_settings" : {
        "flash_mode": "dio",
        "flash_size": "16MB",
        "flash_freq": "80m"
    },
    "flash_files" : {
        "0x0" : "bootloader/bootloader.bin",
        "0x8000" : "partition_table/partition-table.bin",
        "0xd000" : "ota_data_initial.bin",
        "0x10000" : "srmodels/srmodels.bin",
        "0x100000" : "xiaozhi.bin"
    },
    "bootloader" : { "offset" : "0x0", "file" : "bootloader/bootloader.bin", "encrypted" : "false" },
    "app" : { "offset" : "0x100000", "file" : "xiaozhi.bin", "encrypted" : "false" },
    "extra_esptool_args" : {
        "after"  : "hard_reset",
        "before" : "default_reset",
        "stub"   : true,
        "chip"   : "esp32s3"
    }
}"#;

/// A temporary ESP-IDF project with a `build/` directory
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    /// Project with CMakeLists.txt and an empty build directory
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join("CMakeLists.txt"),
            "cmake_minimum_required(VERSION 3.16)\nproject(xiaozhi)\n",
        )?;
        fs::create_dir_all(temp_dir.path().join("build"))?;
        Ok(Self { temp_dir })
    }

    /// Project with every standard artifact present
    pub fn with_all_artifacts() -> std::io::Result<Self> {
        let project = Self::new()?;
        for artifact in ARTIFACTS {
            project.write_artifact(artifact, 1024)?;
        }
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root().join("build")
    }

    /// Write `size` bytes of 0xff at `build/<relative>`
    pub fn write_artifact(&self, relative: &str, size: usize) -> std::io::Result<PathBuf> {
        let path = self.build_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, vec![0xffu8; size])?;
        Ok(path)
    }

    pub fn write_flasher_args(&self, content: &str) -> std::io::Result<PathBuf> {
        let path = self.build_dir().join("flasher_args.json");
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn write_config(&self, content: &str) -> std::io::Result<PathBuf> {
        let path = self.root().join("esp-merge.toml");
        fs::write(&path, content)?;
        Ok(path)
    }
}
