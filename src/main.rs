//! kwgit: list, inspect and prune git branches.
//!
//! This is the main entry point for the `kwgit` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps errors to
//! exit codes.

mod backend;
mod branches;
mod cli;
mod commands;
mod config;
mod context;
mod error;
mod exit_codes;
mod git;
mod logging;
mod prompt;
mod protection;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.log_level);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
