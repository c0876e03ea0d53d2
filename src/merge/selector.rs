//! Primary strategy with an interactive fallback

use crate::errors::MergeError;
use crate::merge::MergeStrategy;
use crate::models::{MergeMethod, MergeResult, MergedImage};
use crate::utils::CommandRunner;

/// What happened across the primary and (optionally) the alternate attempt
#[derive(Debug, Clone)]
pub struct FallbackOutcome {
    /// Methods tried, in order
    pub attempted: Vec<MergeMethod>,
    /// Result of the last attempt
    pub result: MergeResult,
}

impl FallbackOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.has_image()
    }

    pub fn final_method(&self) -> Option<MergeMethod> {
        self.attempted.last().copied()
    }
}

/// Prompt shown before switching to `alternate`
pub fn fallback_prompt(primary: MergeMethod, alternate: MergeMethod) -> String {
    format!(
        "{} method failed, try the {} method?",
        primary.tool_name(),
        alternate.tool_name()
    )
}

/// Run `primary`; when it leaves no image, ask `confirm` whether to run `alternate`.
///
/// `report` sees every attempt as soon as it finishes, so the user reads the
/// failure before being asked to retry.
pub fn run_with_fallback<C, R>(
    primary: &dyn MergeStrategy,
    alternate: &dyn MergeStrategy,
    runner: &dyn CommandRunner,
    confirm: C,
    mut report: R,
) -> FallbackOutcome
where
    C: FnOnce(&str) -> bool,
    R: FnMut(MergeMethod, &Result<MergedImage, MergeError>),
{
    let mut attempted = vec![primary.method()];
    let outcome = primary.produce_merged_image(runner);
    report(primary.method(), &outcome);
    let result = MergeResult::from_outcome(&outcome);

    if result.has_image() {
        return FallbackOutcome { attempted, result };
    }

    let prompt = fallback_prompt(primary.method(), alternate.method());
    if !confirm(&prompt) {
        log::info!("Fallback to {} declined", alternate.method());
        return FallbackOutcome { attempted, result };
    }

    log::info!("Retrying with {} method", alternate.method());
    attempted.push(alternate.method());
    let outcome = alternate.produce_merged_image(runner);
    report(alternate.method(), &outcome);

    FallbackOutcome {
        attempted,
        result: MergeResult::from_outcome(&outcome),
    }
}
