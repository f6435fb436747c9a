//! Version-control backend boundary.
//!
//! The branch engine never talks to git directly. It consumes the narrow
//! query/mutation surface defined by [`BranchBackend`]; [`GitCli`] is the
//! production implementation that shells out to the `git` binary.

mod git_cli;

pub use git_cli::GitCli;

use crate::error::Result;

/// One ref as reported by a metadata listing.
///
/// Date fields are the raw strings the backend produced. Parsing (and
/// dropping records whose committer date is not an integer) is the
/// catalog builder's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefRecord {
    /// Short local name (`feature/x`) or remote-qualified name (`origin/feature/x`).
    pub name: String,
    /// Unix seconds of the ref's creator date, possibly empty or `0`.
    pub creator_date: String,
    /// Unix seconds of the tip commit's committer date.
    pub committer_date: String,
}

impl RefRecord {
    pub fn new(
        name: impl Into<String>,
        creator_date: impl Into<String>,
        committer_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            creator_date: creator_date.into(),
            committer_date: committer_date.into(),
        }
    }
}

/// Queries and mutations the branch engine needs from a repository.
///
/// Implementations are called strictly one operation at a time.
pub trait BranchBackend {
    /// Names of all local branches.
    fn list_local_refs(&self) -> Result<Vec<String>>;

    /// Local branches with creator/committer dates.
    fn list_local_refs_with_metadata(&self) -> Result<Vec<RefRecord>>;

    /// Remote-tracking branches under `remote`, named `<remote>/<branch>`.
    fn list_remote_refs_with_metadata(&self, remote: &str) -> Result<Vec<RefRecord>>;

    /// Timestamp of the oldest reflog entry of a local branch.
    ///
    /// `None` means "no signal": the reflog is missing, expired, or could not
    /// be read. This call never fails.
    fn reflog_oldest_timestamp(&self, name: &str) -> Option<i64>;

    /// Name of the checked-out branch, empty when HEAD is detached.
    fn current_branch_name(&self) -> Result<String>;

    /// Local branches fully merged into `base`, excluding `base` itself.
    ///
    /// Fails with `BaseBranchNotFound` when `base` does not resolve.
    fn merged_branch_names(&self, base: &str) -> Result<Vec<String>>;

    /// Committer timestamp of the tip of `name`.
    ///
    /// Fails with `RefNotFound` when `name` does not resolve.
    fn last_commit_timestamp(&self, name: &str) -> Result<i64>;

    /// Whether `<remote>/<name>` exists as a remote-tracking ref.
    fn remote_ref_exists(&self, name: &str, remote: &str) -> Result<bool>;

    /// Delete a local branch; `force` bypasses the "not fully merged" check.
    fn delete_local_ref(&self, name: &str, force: bool) -> Result<()>;

    /// Delete `name` on `remote` by pushing a deletion.
    fn delete_remote_ref(&self, name: &str, remote: &str) -> Result<()>;
}
