//! Console report formatting
//!
//! Everything here returns `String`s; the binaries decide where to print them.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::errors::MergeError;
use crate::models::{ArtifactReport, FlashSettings, MergedImage};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// A horizontal rule of `width` `=` characters
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Title framed by rules
pub fn banner(title: &str, width: usize) -> String {
    format!("{}\n{}\n{}", rule(width), title, rule(width))
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn mebibytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MIB
}

/// `"4,194,304 bytes (4.00 MB)"`
pub fn format_size(bytes: u64) -> String {
    format!("{} bytes ({:.2} MB)", group_thousands(bytes), mebibytes(bytes))
}

/// One line per artifact, marked found or missing
pub fn format_checklist(report: &ArtifactReport) -> String {
    report
        .entries
        .iter()
        .map(|entry| {
            let mark = if entry.present { "✅" } else { "❌" };
            format!("  {} {}", mark, entry.full_path.display())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Error block for missing inputs, ending with what to run next
pub fn format_missing(files: &[PathBuf]) -> String {
    let mut out = format!("❌ Error: {} files missing!", files.len());
    for path in files {
        let _ = write!(out, "\n  - {}", path.display());
    }
    out.push_str("\nPlease run 'idf.py build' first");
    out
}

/// Success summary with the output location and size, or the no-file warning
pub fn format_merge_success(image: &MergedImage) -> String {
    match image.size {
        Some(size) => format!(
            "✅ Merge successful!\n📁 Output: {}\n📏 Size: {}",
            image.path.display(),
            format_size(size)
        ),
        None => format!(
            "✅ Merge command succeeded\n⚠️  Warning: output file not found: {}",
            image.path.display()
        ),
    }
}

/// Failure summary; tool output is reproduced verbatim
pub fn format_merge_failure(err: &MergeError) -> String {
    match err {
        MergeError::ToolNotFound { tool, hint } => {
            format!("❌ Error: {} not found!\nPlease {}", tool, hint)
        }
        MergeError::ToolFailed { details, .. } => {
            let mut out = format!("❌ Merge failed: {}", err);
            if !details.trim().is_empty() {
                let _ = write!(out, "\nError details: {}", details);
            }
            out
        }
        other => format!("❌ Merge failed: {}", other),
    }
}

/// `"80m"` -> `"80MHz"`, anything unrecognised is passed through
pub fn spi_speed_label(flash_freq: &str) -> String {
    match flash_freq.strip_suffix('m') {
        Some(mhz) if !mhz.is_empty() && mhz.chars().all(|c| c.is_ascii_digit() || c == '.') => {
            format!("{}MHz", mhz)
        }
        _ => flash_freq.to_string(),
    }
}

/// Follow-up flashing commands for a merged image written at offset 0x0
pub fn format_flash_instructions(image_path: &Path, flash: &FlashSettings, baud: u32) -> String {
    let image = image_path.display();
    let mut out = String::new();

    let _ = writeln!(out, "💡 Flash command:");
    let _ = writeln!(out, "   esptool.py -p COMx -b {} write_flash 0x0 {}", baud, image);
    let _ = writeln!(out, "\n💡 Examples:");
    for port in ["COM3", "COM20", "/dev/ttyUSB0"] {
        let _ = writeln!(
            out,
            "   esptool.py -p {} -b {} write_flash 0x0 {}",
            port, baud, image
        );
    }
    let _ = writeln!(out, "\n💡 ESP32 Flash Download Tool:");
    let _ = writeln!(out, "   File: {}", image);
    let _ = writeln!(out, "   Address: 0x0");
    let _ = writeln!(out, "   SPI Mode: {}", flash.flash_mode.to_uppercase());
    let _ = writeln!(out, "   SPI Speed: {}", spi_speed_label(&flash.flash_freq));
    let _ = write!(out, "   Flash Size: {}", flash.flash_size);
    out
}
