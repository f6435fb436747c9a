//! Implementation of the `kwgit list` command.

use super::report;
use crate::backend::BranchBackend;
use crate::branches::{Catalog, build_catalog};
use crate::cli::ListArgs;
use crate::context::RepoContext;
use crate::error::Result;
use crate::protection::ProtectionPolicy;

/// Execute the `kwgit list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let catalog = run_list(&ctx.backend(), &ctx.protection, &ctx.config.remote, &args)?;

    if catalog.is_empty() {
        println!("No branches found.");
        return Ok(());
    }

    let now = super::now();
    if args.json {
        println!("{}", report::catalog_json(&catalog, now)?);
    } else {
        println!(
            "{}",
            report::catalog_table(&catalog, now, report::stdout_supports_color())
        );
    }

    Ok(())
}

/// Build the catalog the flags ask for.
pub fn run_list(
    backend: &dyn BranchBackend,
    protection: &ProtectionPolicy,
    remote: &str,
    args: &ListArgs,
) -> Result<Catalog> {
    let options = super::catalog_options(args.remote || args.all, args.remote_only, remote)?;
    build_catalog(backend, protection, &options)
}
