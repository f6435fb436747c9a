//! Catalog building and index-based selection.

use super::timestamps::{parse_committer_date, parse_creator_date, reconcile};
use super::types::{Branch, Catalog};
use crate::backend::BranchBackend;
use crate::error::{KwgitError, Result};
use crate::protection::ProtectionPolicy;

/// Which refs go into a catalog.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Also enumerate remote-tracking refs.
    pub include_remote: bool,
    /// Enumerate only remote-tracking refs.
    pub remote_only: bool,
    /// Remote whose tracking refs are listed.
    pub remote: String,
}

impl CatalogOptions {
    /// Local branches only.
    pub fn local(remote: impl Into<String>) -> Self {
        Self {
            include_remote: false,
            remote_only: false,
            remote: remote.into(),
        }
    }

    fn lists_local(&self) -> bool {
        !self.remote_only
    }

    fn lists_remote(&self) -> bool {
        self.include_remote || self.remote_only
    }
}

/// Enumerate refs, reconcile their timestamps and return them in creation order.
///
/// Records whose committer date cannot be parsed are dropped with a warning.
pub fn build_catalog(
    backend: &dyn BranchBackend,
    policy: &ProtectionPolicy,
    options: &CatalogOptions,
) -> Result<Catalog> {
    let mut branches = Vec::new();

    if options.lists_local() {
        let current = backend.current_branch_name()?;

        for record in backend.list_local_refs_with_metadata()? {
            let Some(last_commit_date) = parse_committer_date(&record.committer_date) else {
                tracing::warn!(
                    branch = %record.name,
                    committer_date = %record.committer_date,
                    "dropping branch with unparseable committer date"
                );
                continue;
            };

            let reflog = backend.reflog_oldest_timestamp(&record.name);
            let timestamps = reconcile(
                parse_creator_date(&record.creator_date),
                last_commit_date,
                reflog,
            );
            tracing::debug!(branch = %record.name, ?reflog, ?timestamps, "reconciled local branch");

            branches.push(Branch {
                is_current: !current.is_empty() && record.name == current,
                is_remote: false,
                is_protected: policy.is_protected(&record.name),
                creation_date: timestamps.creation_date,
                last_commit_date: timestamps.last_commit_date,
                name: record.name,
            });
        }
    }

    if options.lists_remote() {
        let prefix = format!("{}/", options.remote);

        for record in backend.list_remote_refs_with_metadata(&options.remote)? {
            let Some(last_commit_date) = parse_committer_date(&record.committer_date) else {
                tracing::warn!(
                    branch = %record.name,
                    committer_date = %record.committer_date,
                    "dropping remote branch with unparseable committer date"
                );
                continue;
            };

            let name = record
                .name
                .strip_prefix(&prefix)
                .unwrap_or(&record.name)
                .to_string();
            let timestamps = reconcile(
                parse_creator_date(&record.creator_date),
                last_commit_date,
                None,
            );

            branches.push(Branch {
                is_current: false,
                is_remote: true,
                is_protected: policy.is_protected(&name),
                creation_date: timestamps.creation_date,
                last_commit_date: timestamps.last_commit_date,
                name,
            });
        }
    }

    Ok(Catalog::from_enumerated(branches))
}

/// Build the record for one named local branch when only its name is known.
///
/// The creator date is absent on this path, so the creation date comes from
/// the reflog or falls back to the commit date. A branch that no longer
/// resolves fails with `RefNotFound`.
pub fn resolve_local_branch(
    backend: &dyn BranchBackend,
    policy: &ProtectionPolicy,
    name: &str,
    current_branch: &str,
) -> Result<Branch> {
    let last_commit_date = backend.last_commit_timestamp(name)?;
    let timestamps = reconcile(None, last_commit_date, backend.reflog_oldest_timestamp(name));

    Ok(Branch {
        name: name.to_string(),
        creation_date: timestamps.creation_date,
        last_commit_date: timestamps.last_commit_date,
        is_current: !current_branch.is_empty() && name == current_branch,
        is_remote: false,
        is_protected: policy.is_protected(name),
    })
}

/// Parse 0-based catalog indices as typed on the command line.
pub fn parse_indices(raw: &[String]) -> Result<Vec<usize>> {
    if raw.is_empty() {
        return Err(KwgitError::ConfigError("at least one index is required".to_string()));
    }

    raw.iter()
        .map(|value| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| KwgitError::ConfigError(format!("Invalid index: {}", value)))
        })
        .collect()
}

impl Catalog {
    /// Pick branches by index, in the order the indices were given.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<Branch>> {
        let invalid: Vec<String> = indices
            .iter()
            .filter(|&&index| index >= self.len())
            .map(|index| index.to_string())
            .collect();

        if !invalid.is_empty() {
            let max = if self.is_empty() {
                "the catalog is empty".to_string()
            } else {
                format!("Maximum index is {}", self.len() - 1)
            };
            return Err(KwgitError::ConfigError(format!(
                "Invalid indices: {}. {}.",
                invalid.join(", "),
                max
            )));
        }

        Ok(indices
            .iter()
            .filter_map(|&index| self.get(index).cloned())
            .collect())
    }
}
