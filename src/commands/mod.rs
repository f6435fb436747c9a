//! Command implementations for kwgit.
//!
//! Each command has a `cmd_*` entry point that resolves the repository
//! context and a `run_*` core that takes its collaborators as arguments, so
//! the behavior can be driven by an in-memory backend in tests.

mod clean;
mod focus;
mod list;
pub mod report;
mod stale;


use crate::branches::{CatalogOptions, DeletionLedger};
use crate::cli::Command;
use crate::error::{KwgitError, Result};
use chrono::Utc;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::List(args) => list::cmd_list(args),
        Command::Clean(args) => clean::cmd_clean(args),
        Command::Stale(args) => stale::cmd_stale(args),
        Command::Focus(args) => focus::cmd_focus(args),
    }
}

/// Catalog options for the `--remote`/`--all`/`--remote-only` flag trio.
///
/// `--remote-only` on its own is rejected: the listing it would produce
/// could not be reproduced by `focus` with the same flags.
pub(crate) fn catalog_options(
    include_remote: bool,
    remote_only: bool,
    remote: &str,
) -> Result<CatalogOptions> {
    if remote_only && !include_remote {
        return Err(KwgitError::UserError(
            "--remote-only requires remote branches to be included (use --remote or --all)"
                .to_string(),
        ));
    }

    Ok(CatalogOptions {
        include_remote,
        remote_only,
        remote: remote.to_string(),
    })
}

/// Turn a ledger with failed entries into a git-failure exit.
///
/// The per-branch report has already been printed by then.
pub(crate) fn finish(ledger: DeletionLedger) -> Result<()> {
    if !ledger.has_failures() {
        return Ok(());
    }

    Err(KwgitError::GitError(format!(
        "{} of {} branches could not be deleted",
        ledger.failed.len(),
        ledger.total()
    )))
}

/// Current unix time, taken once per command.
pub(crate) fn now() -> i64 {
    Utc::now().timestamp()
}
