//! Thin layer over the `git` binary.
//!
//! Two flavors: [`run_git`] for commands whose output matters and
//! [`git_succeeds`] for checks where only the exit status carries meaning
//! (`rev-parse --verify --quiet`). Spawn failures are errors in both.

use crate::error::{KwgitError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Captured, trimmed output of a git invocation that exited 0.
#[derive(Debug, Clone, Default)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    fn capture(output: &Output) -> Self {
        let text = |bytes: &[u8]| String::from_utf8_lossy(bytes).trim().to_string();
        Self {
            stdout: text(&output.stdout),
            stderr: text(&output.stderr),
        }
    }

    /// Non-empty stdout lines.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|line| !line.is_empty()).collect()
    }
}

fn spawn(cwd: &Path, args: &[&str]) -> std::io::Result<Output> {
    tracing::debug!(cwd = %cwd.display(), args = ?args, "git");
    Command::new("git").current_dir(cwd).args(args).output()
}

fn spawn_error(args: &[&str], e: std::io::Error) -> KwgitError {
    KwgitError::GitError(format!("could not run `git {}`: {}", args.join(" "), e))
}

/// Run git in `cwd`; a non-zero exit becomes a `GitError` quoting the
/// command line and git's own message.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = spawn(cwd.as_ref(), args).map_err(|e| spawn_error(args, e))?;
    let captured = GitOutput::capture(&output);

    if output.status.success() {
        return Ok(captured);
    }

    let detail = if captured.stderr.is_empty() {
        captured.stdout
    } else {
        captured.stderr
    };
    Err(KwgitError::GitError(format!(
        "`git {}` exited with {}: {}",
        args.join(" "),
        output
            .status
            .code()
            .map_or_else(|| "a signal".to_string(), |c| c.to_string()),
        detail
    )))
}

/// Whether git exits 0. Output is discarded.
pub fn git_succeeds<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<bool> {
    spawn(cwd.as_ref(), args)
        .map(|output| output.status.success())
        .map_err(|e| spawn_error(args, e))
}

/// Top-level directory of the working tree containing `cwd`.
///
/// Outside a repository this is a `UserError`: the user ran kwgit in the
/// wrong place, git itself did not fail.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let args = ["rev-parse", "--show-toplevel"];
    let output = spawn(cwd.as_ref(), &args).map_err(|e| {
        KwgitError::UserError(format!("failed to execute git: {} (is git installed?)", e))
    })?;
    let captured = GitOutput::capture(&output);

    if output.status.success() {
        Ok(PathBuf::from(captured.stdout))
    } else if captured.stderr.contains("not a git repository") {
        Err(KwgitError::UserError(
            "not inside a git repository. Run kwgit from within a git working tree.".to_string(),
        ))
    } else {
        Err(KwgitError::UserError(format!(
            "could not locate the repository root: {}",
            captured.stderr
        )))
    }
}
