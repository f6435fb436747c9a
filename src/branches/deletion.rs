//! Batch deletion with per-branch isolation.
//!
//! Branches are processed one at a time in the order given. A declined
//! prompt or a failed backend call only affects that branch; the batch
//! always runs to the end and reports every outcome in a [`DeletionLedger`].

use super::types::Branch;
use crate::backend::BranchBackend;
use crate::error::{KwgitError, Result};
use serde::Serialize;

/// Yes/no confirmation supplied by the caller (usually an interactive prompt).
pub trait Confirmer {
    /// Ask whether `label` should be deleted.
    fn confirm(&mut self, label: &str) -> bool;

    /// Ask once for a whole batch of `count` branches.
    fn confirm_batch(&mut self, count: usize) -> bool {
        self.confirm(&format!("{} branches", count))
    }
}

/// How a batch is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Confirmation was granted for the whole batch up front.
    All,
    /// Ask the [`Confirmer`] once per branch.
    PerBranch,
    /// Record every branch as skipped without asking or deleting.
    DryRun,
}

/// Options for one deletion batch.
#[derive(Debug, Clone)]
pub struct DeletionPolicy {
    pub confirmation: Confirmation,
    /// Use `-D` semantics for local deletes.
    pub force_local: bool,
    /// After deleting a local branch, also delete its remote-tracking
    /// counterpart when one exists.
    pub also_remote: bool,
    pub remote: String,
}

impl DeletionPolicy {
    pub fn new(confirmation: Confirmation, remote: impl Into<String>) -> Self {
        Self {
            confirmation,
            force_local: false,
            also_remote: false,
            remote: remote.into(),
        }
    }

    pub fn with_force_local(mut self, force_local: bool) -> Self {
        self.force_local = force_local;
        self
    }

    pub fn with_also_remote(mut self, also_remote: bool) -> Self {
        self.also_remote = also_remote;
        self
    }
}

/// What happened to the remote counterpart of a deleted local branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteOutcome {
    /// Remote deletion was not part of this batch.
    NotRequested,
    /// The remote branch was deleted too.
    Deleted,
    /// No remote-tracking ref existed, so there was nothing to delete.
    Absent,
}

/// Why a branch was not deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Declined,
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedEntry {
    pub branch: Branch,
    pub remote: RemoteOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub branch: Branch,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedEntry {
    pub branch: Branch,
    /// The backend's error message, unmodified.
    pub error: String,
}

/// Outcomes of a batch, each list in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionLedger {
    pub deleted: Vec<DeletedEntry>,
    pub skipped: Vec<SkippedEntry>,
    pub failed: Vec<FailedEntry>,
}

impl DeletionLedger {
    /// Ledger for a batch whose batch-wide confirmation was refused.
    pub fn declined(branches: &[Branch]) -> Self {
        Self {
            skipped: branches
                .iter()
                .map(|branch| SkippedEntry {
                    branch: branch.clone(),
                    reason: SkipReason::Declined,
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.deleted.len() + self.skipped.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    fn skip(&mut self, branch: &Branch, reason: SkipReason) {
        self.skipped.push(SkippedEntry {
            branch: branch.clone(),
            reason,
        });
    }

    fn fail(&mut self, branch: &Branch, error: String) {
        self.failed.push(FailedEntry {
            branch: branch.clone(),
            error,
        });
    }
}

/// Reject a selection containing the checked-out branch or a protected one.
///
/// This is a whole-selection check: one offending branch fails the entire
/// operation before anything is prompted or deleted.
pub fn ensure_deletable(branches: &[Branch]) -> Result<()> {
    let protected: Vec<&str> = branches
        .iter()
        .filter(|branch| branch.is_protected)
        .map(|branch| branch.name.as_str())
        .collect();
    if !protected.is_empty() {
        return Err(KwgitError::InvariantViolation(format!(
            "Cannot delete protected branches: {}. Remove them from your selection.",
            protected.join(", ")
        )));
    }

    let current: Vec<&str> = branches
        .iter()
        .filter(|branch| branch.is_current)
        .map(|branch| branch.name.as_str())
        .collect();
    if !current.is_empty() {
        return Err(KwgitError::InvariantViolation(format!(
            "Cannot delete current branch: {}. Switch to a different branch before deleting.",
            current.join(", ")
        )));
    }

    Ok(())
}

/// Delete `branches` in order according to `policy`.
///
/// Only the pre-flight check can fail the call; backend errors are recorded
/// per branch in `failed` and processing continues.
pub fn delete_batch(
    backend: &dyn BranchBackend,
    branches: &[Branch],
    policy: &DeletionPolicy,
    confirmer: &mut dyn Confirmer,
) -> Result<DeletionLedger> {
    ensure_deletable(branches)?;

    let mut ledger = DeletionLedger::default();

    for branch in branches {
        match policy.confirmation {
            Confirmation::DryRun => {
                ledger.skip(branch, SkipReason::DryRun);
                continue;
            }
            Confirmation::PerBranch if !confirmer.confirm(&branch.label()) => {
                tracing::debug!(
                    branch = %branch.name,
                    remote = branch.is_remote,
                    "deletion declined"
                );
                ledger.skip(branch, SkipReason::Declined);
                continue;
            }
            Confirmation::PerBranch | Confirmation::All => {}
        }

        match delete_one(backend, branch, policy) {
            Ok(remote) => {
                tracing::info!(
                    branch = %branch.name,
                    remote_branch = branch.is_remote,
                    "deleted branch"
                );
                ledger.deleted.push(DeletedEntry {
                    branch: branch.clone(),
                    remote,
                });
            }
            Err(error) => {
                tracing::warn!(branch = %branch.name, %error, "failed to delete branch");
                ledger.fail(branch, error);
            }
        }
    }

    Ok(ledger)
}

fn delete_one(
    backend: &dyn BranchBackend,
    branch: &Branch,
    policy: &DeletionPolicy,
) -> std::result::Result<RemoteOutcome, String> {
    if branch.is_remote {
        backend
            .delete_remote_ref(&branch.name, &policy.remote)
            .map_err(|e| e.to_string())?;
        return Ok(RemoteOutcome::NotRequested);
    }

    backend
        .delete_local_ref(&branch.name, policy.force_local)
        .map_err(|e| e.to_string())?;

    if !policy.also_remote {
        return Ok(RemoteOutcome::NotRequested);
    }

    let remote_step = backend
        .remote_ref_exists(&branch.name, &policy.remote)
        .and_then(|exists| {
            if exists {
                backend
                    .delete_remote_ref(&branch.name, &policy.remote)
                    .map(|()| RemoteOutcome::Deleted)
            } else {
                Ok(RemoteOutcome::Absent)
            }
        });

    remote_step.map_err(|e| {
        format!(
            "local branch deleted, but remote branch {}/{} was not: {}",
            policy.remote, branch.name, e
        )
    })
}
