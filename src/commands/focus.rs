//! Implementation of the `kwgit focus` command.
//!
//! Resolves `list` indices back to branches. The flags that shaped the
//! listing must be repeated so the indices line up.

use super::report;
use crate::backend::BranchBackend;
use crate::branches::{
    Branch, Confirmation, Confirmer, DeletionLedger, DeletionPolicy, build_catalog, delete_batch,
    ensure_deletable, parse_indices,
};
use crate::cli::FocusArgs;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::{KwgitError, Result};
use crate::prompt::{TerminalConfirmer, plural};
use crate::protection::ProtectionPolicy;

/// Execute the `kwgit focus` command.
pub fn cmd_focus(args: FocusArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let mut confirmer = TerminalConfirmer;
    let ledger = run_focus(
        &ctx.backend(),
        &ctx.protection,
        &ctx.config,
        &args,
        &mut confirmer,
    )?;
    super::finish(ledger)
}

/// Resolve the selection, then view, print or delete it.
///
/// Protected branches are rejected before anything is shown; the current
/// branch is only rejected when deletion is requested.
pub fn run_focus(
    backend: &dyn BranchBackend,
    protection: &ProtectionPolicy,
    config: &Config,
    args: &FocusArgs,
    confirmer: &mut dyn Confirmer,
) -> Result<DeletionLedger> {
    let indices = parse_indices(&args.indices)?;
    let options = super::catalog_options(
        args.remote || args.all_branches,
        args.remote_only,
        &config.remote,
    )?;

    let catalog = build_catalog(backend, protection, &options)?;
    if catalog.is_empty() {
        println!("No branches found.");
        return Ok(DeletionLedger::default());
    }

    let selected = catalog.select(&indices)?;
    reject_protected(&selected)?;

    if args.json {
        println!("{}", report::branches_json(&selected)?);
        return Ok(DeletionLedger::default());
    }

    if args.view {
        println!("Selected branches:");
        println!("{}", report::bullet_list(&selected));
        return Ok(DeletionLedger::default());
    }

    ensure_deletable(&selected)?;

    println!(
        "Reviewing {} {} for deletion:",
        selected.len(),
        plural(selected.len())
    );
    println!();

    let confirmation = if args.yes {
        Confirmation::All
    } else {
        Confirmation::PerBranch
    };
    let policy = DeletionPolicy::new(confirmation, &config.remote).with_force_local(args.force);

    let ledger = delete_batch(backend, &selected, &policy, confirmer)?;
    println!("{}", report::ledger_report(&ledger, &config.remote));

    Ok(ledger)
}

fn reject_protected(selected: &[Branch]) -> Result<()> {
    let protected: Vec<&str> = selected
        .iter()
        .filter(|b| b.is_protected)
        .map(|b| b.name.as_str())
        .collect();

    if protected.is_empty() {
        return Ok(());
    }

    Err(KwgitError::InvariantViolation(format!(
        "Cannot focus on protected branches: {}. Protected branches cannot be deleted; remove them from your selection.",
        protected.join(", ")
    )))
}
