//! Interactive yes/no prompts.

use crate::branches::Confirmer;
use dialoguer::Confirm;

/// Asks on the terminal. Defaults to "no"; if the prompt cannot be shown
/// (no TTY, closed stdin) the answer is "no" as well.
#[derive(Debug, Default)]
pub struct TerminalConfirmer;

impl TerminalConfirmer {
    fn ask(prompt: String) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "confirmation prompt failed, treating as declined");
                false
            })
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, label: &str) -> bool {
        Self::ask(format!("Delete branch '{}'?", label))
    }

    fn confirm_batch(&mut self, count: usize) -> bool {
        Self::ask(format!(
            "Are you sure you want to delete {} {}?",
            count,
            plural(count)
        ))
    }
}

/// "branch" or "branches".
pub fn plural(count: usize) -> &'static str {
    if count == 1 { "branch" } else { "branches" }
}
