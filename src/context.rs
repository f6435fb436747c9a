//! Repository context resolution for kwgit.
//!
//! Finds the repository root from any working directory, loads
//! `.kwgit.yaml`, and resolves the protected branch set once so the rest of
//! the program receives it as a value instead of reading the environment.

use crate::backend::GitCli;
use crate::config::Config;
use crate::error::{KwgitError, Result};
use crate::git;
use crate::protection::{PROTECTED_BRANCHES_ENV, ProtectionPolicy};
use std::env;
use std::path::{Path, PathBuf};

/// Everything a command needs to talk to the repository.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Absolute path to the repository working tree root.
    pub repo_root: PathBuf,
    pub config: Config,
    pub protection: ProtectionPolicy,
}

impl RepoContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            KwgitError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        let env_override = env::var(PROTECTED_BRANCHES_ENV).ok();
        Self::resolve_from(&cwd, env_override.as_deref())
    }

    /// Resolve the context from a specific directory.
    ///
    /// `protected_override` is the raw value of `KWGIT_PROTECTED_BRANCHES`, if set.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P, protected_override: Option<&str>) -> Result<Self> {
        let repo_root = git::get_repo_root(cwd)?;
        let config = Config::load_from_repo(&repo_root)?;
        let protection = ProtectionPolicy::new(config.protection(protected_override));
        tracing::debug!(
            repo_root = %repo_root.display(),
            protected = ?protection.config().names(),
            "resolved repository context"
        );

        Ok(Self {
            repo_root,
            config,
            protection,
        })
    }

    /// Git backend for this repository.
    pub fn backend(&self) -> GitCli {
        GitCli::new(&self.repo_root)
    }
}
