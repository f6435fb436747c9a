//! CLI argument parsing for kwgit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Command behavior lives in the `commands` module.

use crate::logging::LogLevel;
use clap::{ArgAction, Parser, Subcommand};

/// kwgit: list, inspect and prune git branches.
///
/// Branches are listed oldest first by creation date. Deletion never touches
/// protected branches or the branch that is checked out.
#[derive(Parser, Debug)]
#[command(name = "kwgit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (overridden by KWGIT_LOG).
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for kwgit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List branches sorted by creation date.
    ///
    /// Each row shows an index usable with `focus`.
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Delete branches whose names match a regular expression.
    ///
    /// Runs as a dry run unless `--dry-run false` is passed.
    Clean(CleanArgs),

    /// Delete local branches whose last commit falls in an age window.
    Stale(StaleArgs),

    /// Review branches picked by their `list` index.
    ///
    /// Selected branches are shown, printed as JSON, or deleted one by one.
    Focus(FocusArgs),
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Include remote-tracking branches.
    #[arg(short, long)]
    pub remote: bool,

    /// Show only remote-tracking branches (requires --remote or --all).
    #[arg(long)]
    pub remote_only: bool,

    /// Show local and remote-tracking branches.
    #[arg(short, long)]
    pub all: bool,

    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Regular expression matched against branch names.
    #[arg(default_value = ".*")]
    pub pattern: String,

    /// Only show what would be deleted.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub dry_run: bool,

    /// Only consider branches merged into the base branch.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub merged: bool,

    /// Skip the confirmation prompt and force-delete unmerged branches.
    #[arg(short, long)]
    pub force: bool,

    /// Base branch for the merged check (defaults to config `base_branch`).
    #[arg(short, long)]
    pub base: Option<String>,

    /// Also delete the matching branch on the remote.
    #[arg(short, long)]
    pub remote: bool,
}

/// Arguments for the `stale` command.
#[derive(Parser, Debug)]
pub struct StaleArgs {
    /// Minimum age in days (defaults to config `stale_min_days`).
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Maximum age in days (defaults to config `stale_max_days`).
    #[arg(short, long)]
    pub max_days: Option<u32>,

    /// Branch never treated as stale (defaults to config `base_branch`).
    #[arg(short, long)]
    pub base: Option<String>,

    /// Only show what would be deleted.
    #[arg(long)]
    pub dry_run: bool,

    /// Delete without asking for each branch.
    #[arg(short, long)]
    pub force: bool,

    /// Also delete the branch on the remote.
    #[arg(short, long)]
    pub remote: bool,
}

/// Arguments for the `focus` command.
#[derive(Parser, Debug)]
pub struct FocusArgs {
    /// Indices from `kwgit list`.
    #[arg(required = true)]
    pub indices: Vec<String>,

    /// Include remote-tracking branches when resolving indices.
    #[arg(short, long)]
    pub remote: bool,

    /// Resolve indices against remote-tracking branches only.
    #[arg(long)]
    pub remote_only: bool,

    /// Resolve indices against local and remote-tracking branches.
    #[arg(short, long)]
    pub all_branches: bool,

    /// Print the selected branches as JSON.
    #[arg(long)]
    pub json: bool,

    /// Show the selected branches without deleting anything.
    #[arg(long)]
    pub view: bool,

    /// Force-delete unmerged branches.
    #[arg(short, long)]
    pub force: bool,

    /// Delete without asking for each branch.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
