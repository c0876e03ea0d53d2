//! Interactive prompts

use anyhow::{Context, Result};
use dialoguer::Confirm;
use std::io::{self, BufRead, IsTerminal};

/// Yes/no question defaulting to "no"
pub fn confirm_retry(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation input")
}

/// `y` or `yes`, any case
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Take one answer line from a non-interactive `reader`; end of input means "no"
pub fn read_answer<R: BufRead>(reader: &mut R, prompt: &str) -> bool {
    println!("{} (y/N)", prompt);

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => {
            log::warn!("No answer on stdin, declining: {}", prompt);
            false
        }
        Ok(_) => is_affirmative(&line),
        Err(e) => {
            log::warn!("Failed to read answer from stdin: {}", e);
            false
        }
    }
}

/// [`confirm_retry`] on a terminal, a piped answer line otherwise; any failure means "no"
pub fn confirm_retry_or_decline(prompt: &str) -> bool {
    if !io::stdin().is_terminal() {
        return read_answer(&mut io::stdin().lock(), prompt);
    }

    confirm_retry(prompt).unwrap_or_else(|e| {
        log::warn!("{:#}", e);
        false
    })
}

/// Hold the console window open until Enter, when someone is there to press it
pub fn pause_for_enter(message: &str) {
    if !io::stdin().is_terminal() {
        return;
    }

    println!("{}", message);
    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        log::debug!("Failed to read from stdin: {}", e);
    }
}
