//! Implementation of the `kwgit stale` command.
//!
//! Local branches whose last commit falls inside the age window are offered
//! for deletion one by one. Stale branches are rarely merged, so local
//! deletion is always forced.

use super::report;
use crate::backend::BranchBackend;
use crate::branches::{
    AgeWindow, Branch, CatalogOptions, Confirmation, Confirmer, DeletionLedger, DeletionPolicy,
    build_catalog, classify_by_age, delete_batch,
};
use crate::cli::StaleArgs;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::Result;
use crate::prompt::{TerminalConfirmer, plural};
use crate::protection::ProtectionPolicy;

/// Execute the `kwgit stale` command.
pub fn cmd_stale(args: StaleArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let mut confirmer = TerminalConfirmer;
    let ledger = run_stale(
        &ctx.backend(),
        &ctx.protection,
        &ctx.config,
        &args,
        &mut confirmer,
        super::now(),
    )?;
    super::finish(ledger)
}

/// Classify by age at `now` and delete per the flags.
pub fn run_stale(
    backend: &dyn BranchBackend,
    protection: &ProtectionPolicy,
    config: &Config,
    args: &StaleArgs,
    confirmer: &mut dyn Confirmer,
    now: i64,
) -> Result<DeletionLedger> {
    let window = AgeWindow::new(
        args.days.unwrap_or(config.stale_min_days),
        args.max_days.unwrap_or(config.stale_max_days),
    )?;
    let base = args.base.as_deref().unwrap_or(&config.base_branch);

    let catalog = build_catalog(backend, protection, &CatalogOptions::local(&config.remote))?;
    let candidates = classify_by_age(&catalog, &window, base, now);

    if candidates.is_empty() {
        println!(
            "No stale branches found between {} and {} days old.",
            window.min_days(),
            window.max_days()
        );
        return Ok(DeletionLedger::default());
    }

    println!(
        "Found {} potentially stale {}:",
        candidates.len(),
        plural(candidates.len())
    );

    let mut deletable: Vec<Branch> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let branch = candidate.branch;
        println!("  • {} ({} days old)", branch.name, candidate.age_in_days);
        if branch.is_protected {
            println!("    Skipping protected branch: {}", branch.name);
        } else if branch.is_current {
            println!("    Skipping current branch: {}", branch.name);
        } else {
            deletable.push(branch);
        }
    }
    println!();

    if deletable.is_empty() {
        println!("No deletable stale branches.");
        return Ok(DeletionLedger::default());
    }

    let confirmation = if args.dry_run {
        Confirmation::DryRun
    } else if args.force {
        Confirmation::All
    } else {
        Confirmation::PerBranch
    };
    let policy = DeletionPolicy::new(confirmation, &config.remote)
        .with_force_local(true)
        .with_also_remote(args.remote);

    let ledger = delete_batch(backend, &deletable, &policy, confirmer)?;
    println!("{}", report::ledger_report(&ledger, &config.remote));
    if args.dry_run {
        println!("Dry run enabled, no branches were deleted.");
    }

    Ok(ledger)
}
