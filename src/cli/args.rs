//! Command line argument parsing

use crate::models::MergeMethod;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "merge-flash")]
#[command(about = "Merge ESP32 firmware artifacts into one flashable image")]
pub struct MergeFlashCli {
    /// Merge method: 'idf' (idf.py merge-bin) or 'esptool' (esptool merge_bin from flasher_args.json)
    #[arg(long, value_enum, default_value_t = MergeMethod::Idf)]
    pub method: MergeMethod,

    /// ESP-IDF project root (defaults to the nearest directory with CMakeLists.txt and a build dir)
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "quick-merge")]
#[command(about = "Merge build/ artifacts with esptool using the fixed ESP32-S3 layout")]
pub struct QuickMergeCli {}

impl MergeFlashCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl QuickMergeCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
