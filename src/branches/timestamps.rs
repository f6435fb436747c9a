//! Creation / last-activity timestamp reconciliation.
//!
//! Three signals are available for a branch:
//!
//! - the ref's creator date, which many backends fill with the tip commit's
//!   date rather than the time the ref appeared, and which may be `0`;
//! - the ref's committer date, always the authoritative last-activity time;
//! - the oldest reflog entry, which records when the ref first appeared
//!   locally but exists only for local branches and can be expired.
//!
//! The reflog wins over the creator date when the creator date is only a
//! placeholder (equal to the commit date) or when the reflog is earlier.

use serde::Serialize;

/// Reconciled timestamps for one branch (Unix seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchTimestamps {
    pub creation_date: i64,
    pub last_commit_date: i64,
}

/// Parse a committer date field. `None` drops the record from the catalog.
pub fn parse_committer_date(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parse a creator date field. Missing, unparseable and zero all mean "absent".
pub fn parse_creator_date(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|ts| *ts != 0)
}

/// Combine the available signals into one timestamp pair.
///
/// Pass `reflog_oldest = None` for remote refs; the reflog is local-only.
pub fn reconcile(
    creator_date: Option<i64>,
    last_commit_date: i64,
    reflog_oldest: Option<i64>,
) -> BranchTimestamps {
    let mut creation_date = creator_date.unwrap_or(last_commit_date);

    if let Some(reflog) = reflog_oldest
        && (creation_date == last_commit_date || reflog < creation_date)
    {
        creation_date = reflog;
    }

    BranchTimestamps {
        creation_date,
        last_commit_date,
    }
}
