//! [`BranchBackend`] implemented on top of the git command line.

use super::{BranchBackend, RefRecord};
use crate::error::{KwgitError, Result};
use crate::git::{git_succeeds, run_git};
use std::path::{Path, PathBuf};

/// Field separator used in `for-each-ref` formats (`%09` is a tab).
const REF_FORMAT: &str = "%(refname)%09%(creatordate:unix)%09%(committerdate:unix)";

/// Git backend rooted at a repository working tree.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(repo_root: P) -> Self {
        Self {
            repo_root: repo_root.as_ref().to_path_buf(),
        }
    }

    fn for_each_ref(&self, prefix: &str) -> Result<Vec<(String, String, String)>> {
        let format = format!("--format={}", REF_FORMAT);
        let output = run_git(&self.repo_root, &["for-each-ref", &format, prefix])?;

        Ok(output
            .lines()
            .into_iter()
            .filter_map(|line| {
                let mut fields = line.splitn(3, '\t');
                let refname = fields.next()?;
                let creator = fields.next().unwrap_or("");
                let committer = fields.next().unwrap_or("");
                Some((
                    refname.to_string(),
                    creator.to_string(),
                    committer.to_string(),
                ))
            })
            .collect())
    }

    fn resolves(&self, rev: &str) -> Result<bool> {
        git_succeeds(&self.repo_root, &["rev-parse", "--verify", "--quiet", rev])
    }
}

#[cfg(test)]
impl GitCli {
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

impl BranchBackend for GitCli {
    fn list_local_refs(&self) -> Result<Vec<String>> {
        let output = run_git(
            &self.repo_root,
            &["for-each-ref", "--format=%(refname:short)", "refs/heads/"],
        )?;
        Ok(output.lines().into_iter().map(str::to_string).collect())
    }

    fn list_local_refs_with_metadata(&self) -> Result<Vec<RefRecord>> {
        Ok(self
            .for_each_ref("refs/heads/")?
            .into_iter()
            .filter_map(|(refname, creator, committer)| {
                let name = refname.strip_prefix("refs/heads/")?;
                Some(RefRecord::new(name, creator, committer))
            })
            .collect())
    }

    fn list_remote_refs_with_metadata(&self, remote: &str) -> Result<Vec<RefRecord>> {
        let prefix = format!("refs/remotes/{}/", remote);
        Ok(self
            .for_each_ref(&prefix)?
            .into_iter()
            .filter_map(|(refname, creator, committer)| {
                let short = refname.strip_prefix("refs/remotes/")?;
                // origin/HEAD is a symbolic pointer, not a branch.
                if short.ends_with("/HEAD") {
                    return None;
                }
                Some(RefRecord::new(short, creator, committer))
            })
            .collect())
    }

    fn reflog_oldest_timestamp(&self, name: &str) -> Option<i64> {
        let refname = format!("refs/heads/{}", name);
        let output = match run_git(
            &self.repo_root,
            &["reflog", "show", "--date=unix", "--format=%gd", &refname],
        ) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(branch = name, error = %e, "reflog unavailable");
                return None;
            }
        };

        // Entries are newest first; each selector looks like `refs/heads/x@{1716249302}`.
        let oldest = output.lines().into_iter().last()?;
        let start = oldest.rfind("@{")? + 2;
        let end = oldest[start..].find('}')? + start;
        oldest[start..end].parse().ok()
    }

    fn current_branch_name(&self) -> Result<String> {
        Ok(run_git(&self.repo_root, &["branch", "--show-current"])?.stdout)
    }

    fn merged_branch_names(&self, base: &str) -> Result<Vec<String>> {
        if !self.resolves(&format!("{}^{{commit}}", base))? {
            return Err(KwgitError::BaseBranchNotFound(base.to_string()));
        }

        let output = run_git(
            &self.repo_root,
            &["branch", "--format=%(refname:short)", "--merged", base],
        )?;

        Ok(output
            .lines()
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != base)
            .map(str::to_string)
            .collect())
    }

    fn last_commit_timestamp(&self, name: &str) -> Result<i64> {
        let output = run_git(
            &self.repo_root,
            &["log", "-1", "--format=%ct", name, "--"],
        )
        .map_err(|_| KwgitError::RefNotFound(name.to_string()))?;

        output.stdout.parse().map_err(|_| {
            KwgitError::GitError(format!(
                "unexpected commit timestamp for '{}': '{}'",
                name, output.stdout
            ))
        })
    }

    fn remote_ref_exists(&self, name: &str, remote: &str) -> Result<bool> {
        self.resolves(&format!("refs/remotes/{}/{}", remote, name))
    }

    fn delete_local_ref(&self, name: &str, force: bool) -> Result<()> {
        let delete_flag = if force { "-D" } else { "-d" };

        run_git(&self.repo_root, &["branch", delete_flag, name]).map_err(|e| {
            KwgitError::GitError(format!("failed to delete branch '{}': {}", name, e))
        })?;

        Ok(())
    }

    fn delete_remote_ref(&self, name: &str, remote: &str) -> Result<()> {
        run_git(&self.repo_root, &["push", remote, "--delete", name]).map_err(|e| {
            KwgitError::GitError(format!(
                "failed to delete remote branch '{}/{}': {}",
                remote, name, e
            ))
        })?;

        Ok(())
    }
}
