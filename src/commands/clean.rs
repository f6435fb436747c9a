//! Implementation of the `kwgit clean` command.
//!
//! Selects branches by regex (merged into the base branch by default),
//! reports what matched and asks once before deleting the batch.

use super::report;
use crate::backend::BranchBackend;
use crate::branches::{
    Confirmation, Confirmer, DeletionLedger, DeletionPolicy, PatternQuery, classify_by_pattern,
    delete_batch,
};
use crate::cli::CleanArgs;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::Result;
use crate::prompt::{TerminalConfirmer, plural};
use crate::protection::ProtectionPolicy;

/// Execute the `kwgit clean` command.
pub fn cmd_clean(args: CleanArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let mut confirmer = TerminalConfirmer;
    let ledger = run_clean(
        &ctx.backend(),
        &ctx.protection,
        &ctx.config,
        &args,
        &mut confirmer,
    )?;
    super::finish(ledger)
}

/// Select, report and (unless dry-running or declined) delete.
///
/// The pattern is compiled before the repository is queried. `--force`
/// skips the batch prompt and force-deletes unmerged branches.
pub fn run_clean(
    backend: &dyn BranchBackend,
    protection: &ProtectionPolicy,
    config: &Config,
    args: &CleanArgs,
    confirmer: &mut dyn Confirmer,
) -> Result<DeletionLedger> {
    let base = args.base.as_deref().unwrap_or(&config.base_branch);
    let query = PatternQuery::new(&args.pattern, args.merged, base)?;

    if query.merged_only() {
        println!(
            "Finding branches merged into {} matching pattern: {}",
            query.base_branch(),
            query.pattern()
        );
    } else {
        println!("Finding branches matching pattern: {}", query.pattern());
    }
    let selection = classify_by_pattern(backend, protection, &query)?;

    if selection.is_empty() {
        println!("No matching branches found.");
        return Ok(DeletionLedger::default());
    }

    println!(
        "Found {} matching {}:",
        selection.matching.len(),
        plural(selection.matching.len())
    );
    println!("{}", report::bullet_list(&selection.matching));
    println!();

    for branch in &selection.protected {
        println!("Skipping protected branch: {}", branch.name);
    }
    if let Some(branch) = &selection.checked_out {
        println!("Skipping checked-out branch: {}", branch.name);
    }

    let deletable = &selection.deletable;
    if deletable.is_empty() {
        println!("No deletable branches found (all are protected or checked out).");
        return Ok(DeletionLedger::default());
    }

    if args.dry_run {
        let policy = DeletionPolicy::new(Confirmation::DryRun, &config.remote);
        let ledger = delete_batch(backend, deletable, &policy, confirmer)?;
        println!("{}", report::ledger_report(&ledger, &config.remote));
        println!("Dry run enabled, no branches were deleted.");
        return Ok(ledger);
    }

    println!("These branches will be deleted:");
    println!("{}", report::bullet_list(deletable));

    if !args.force && !confirmer.confirm_batch(deletable.len()) {
        println!("Aborted. No branches were deleted.");
        return Ok(DeletionLedger::declined(deletable));
    }
    println!();

    let policy = DeletionPolicy::new(Confirmation::All, &config.remote)
        .with_force_local(args.force)
        .with_also_remote(args.remote);
    let ledger = delete_batch(backend, deletable, &policy, confirmer)?;
    println!("{}", report::ledger_report(&ledger, &config.remote));

    Ok(ledger)
}
