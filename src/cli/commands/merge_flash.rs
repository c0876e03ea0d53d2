use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::args::MergeFlashCli;
use crate::cli::commands::{CommandOutcome, check_inputs};
use crate::config::{CONFIG_FILE_NAME, MergeConfig};
use crate::merge::{EsptoolMergeStrategy, IdfMergeStrategy, MergeStrategy, run_with_fallback};
use crate::models::MergeMethod;
use crate::ui::report;
use crate::utils::{CommandRunner, resolve_project_root};

const WIDTH: usize = 60;

/// Check artifacts, then merge with the selected method, offering the other on failure.
///
/// `cwd` is where project root discovery starts; `confirm` answers the fallback question.
pub fn execute_merge_flash_command<C>(
    cli: &MergeFlashCli,
    cwd: &Path,
    runner: &dyn CommandRunner,
    confirm: C,
) -> Result<CommandOutcome>
where
    C: FnOnce(&str) -> bool,
{
    println!("ESP32 Firmware Merge Tool");
    println!("{}", report::rule(40));

    let default_build_dir = MergeConfig::default().build_dir;
    let project_root = resolve_project_root(
        cli.project_dir.as_deref(),
        cwd,
        &[default_build_dir.as_path(), Path::new(CONFIG_FILE_NAME)],
    );
    println!("📁 Project root: {}", project_root.display());

    let config = MergeConfig::load(&project_root)
        .with_context(|| format!("Failed to load configuration for {}", project_root.display()))?;

    if check_inputs(&config.build_dir_in(&project_root), &config.artifacts).is_err() {
        return Ok(CommandOutcome::MissingInputs);
    }

    let idf = IdfMergeStrategy::new(&project_root, &config);
    let esptool = EsptoolMergeStrategy::from_flasher_args(&project_root, &config);
    let (primary, alternate): (&dyn MergeStrategy, &dyn MergeStrategy) = match cli.method {
        MergeMethod::Idf => (&idf, &esptool),
        MergeMethod::Esptool => (&esptool, &idf),
    };

    println!("\n🔧 Merging firmware using {}...", primary.method().tool_name());
    let outcome = run_with_fallback(primary, alternate, runner, confirm, |method, result| {
        match result {
            Ok(image) => println!("{}", report::format_merge_success(image)),
            Err(e) => println!("[{}] {}", method, report::format_merge_failure(e)),
        }
    });

    match &outcome.result.output_path {
        Some(path) if outcome.succeeded() => {
            if let Some(method) = outcome.final_method() {
                log::info!("Merged with the {} method", method);
            }
            println!("\n{}", report::banner("Merge complete! Flash it with:", WIDTH));
            println!(
                "{}",
                report::format_flash_instructions(path, &config.flash, config.flash_baud)
            );
            println!("{}", report::rule(WIDTH));
            Ok(CommandOutcome::Merged)
        }
        _ => {
            log::debug!("Attempted methods: {:?}", outcome.attempted);
            Ok(CommandOutcome::MergeFailed)
        }
    }
}
