//! quick-merge - one-shot esptool merge of the standard build/ layout
//!
//! Binary entry point; takes no arguments and works on the current directory.

use esp_merge::cli::QuickMergeCli;
use esp_merge::cli::commands::quick;
use esp_merge::ui::prompt;
use esp_merge::utils::{SystemRunner, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let _cli = QuickMergeCli::parse_args();

    if let Err(e) = logging::init_cli_logging(0, false) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("❌ Failed to determine current directory: {}", e);
            return ExitCode::from(2);
        }
    };

    let outcome = quick::execute_quick_merge_command(&cwd, &SystemRunner);

    println!();
    prompt::pause_for_enter("Press Enter to exit...");
    outcome.exit_code()
}
