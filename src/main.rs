//! merge-flash - merge ESP32 build artifacts with idf.py or esptool
//!
//! Binary entry point for the flexible merge tool.

use anyhow::{Context, Result};
use esp_merge::cli::MergeFlashCli;
use esp_merge::cli::commands::{CommandOutcome, merge_flash};
use esp_merge::ui::prompt;
use esp_merge::utils::{SystemRunner, logging};
use std::process::ExitCode;

fn run(cli: &MergeFlashCli) -> Result<CommandOutcome> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    merge_flash::execute_merge_flash_command(
        cli,
        &cwd,
        &SystemRunner,
        prompt::confirm_retry_or_decline,
    )
}

fn main() -> ExitCode {
    let cli = MergeFlashCli::parse_args();

    if let Err(e) = logging::init_cli_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::from(2)
        }
    }
}
