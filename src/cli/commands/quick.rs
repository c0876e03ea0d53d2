use std::path::Path;

use crate::cli::commands::{CommandOutcome, check_inputs};
use crate::config::MergeConfig;
use crate::merge::{EsptoolMergeStrategy, MergeStrategy};
use crate::ui::report;
use crate::utils::CommandRunner;

const WIDTH: usize = 50;

/// Merge the fixed five-file layout under `base_dir/build` with esptool
pub fn execute_quick_merge_command(base_dir: &Path, runner: &dyn CommandRunner) -> CommandOutcome {
    let config = MergeConfig::default();

    println!("{}", report::banner("Quick ESP32 Firmware Merge Tool", WIDTH));

    println!("Checking files...");
    if check_inputs(&config.build_dir_in(base_dir), &config.artifacts).is_err() {
        return CommandOutcome::MissingInputs;
    }
    println!("\n✅ All files found!");

    println!("\n🔧 Merging firmware using esptool...");
    let strategy = EsptoolMergeStrategy::fixed(base_dir, &config);

    match strategy.produce_merged_image(runner) {
        Ok(image) => {
            println!("{}", report::format_merge_success(&image));
            if !image.exists() {
                return CommandOutcome::MergeFailed;
            }

            println!("\n{}", report::banner("🎉 SUCCESS! Ready to flash!", WIDTH));
            println!(
                "{}",
                report::format_flash_instructions(&image.path, &config.flash, config.flash_baud)
            );
            println!("{}", report::rule(WIDTH));
            CommandOutcome::Merged
        }
        Err(e) => {
            println!("{}", report::format_merge_failure(&e));
            CommandOutcome::MergeFailed
        }
    }
}
