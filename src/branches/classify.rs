//! Deletion candidate classification.
//!
//! Two independent selection modes:
//!
//! - **age window**: local branches whose last commit is between
//!   `min_days` and `max_days` old (both inclusive);
//! - **pattern**: local (or merged-into-base) branch names matching a
//!   regex, split into deletable and protected.
//!
//! Classification never drops protected branches from the age window; they
//! are returned flagged so listings can show them. The deletion boundary
//! ([`super::ensure_deletable`]) is what keeps them safe.

use super::SECONDS_PER_DAY;
use super::catalog::resolve_local_branch;
use super::types::{Branch, Catalog};
use crate::backend::BranchBackend;
use crate::error::{KwgitError, Result};
use crate::protection::ProtectionPolicy;
use regex::Regex;

/// Inclusive range of branch ages, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeWindow {
    min_days: u32,
    max_days: u32,
}

impl AgeWindow {
    pub fn new(min_days: u32, max_days: u32) -> Result<Self> {
        if min_days > max_days {
            return Err(KwgitError::ConfigError(format!(
                "minimum age ({} days) is greater than maximum age ({} days)",
                min_days, max_days
            )));
        }
        Ok(Self { min_days, max_days })
    }

    pub fn min_days(&self) -> u32 {
        self.min_days
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub fn contains(&self, age_in_days: i64) -> bool {
        age_in_days >= i64::from(self.min_days) && age_in_days <= i64::from(self.max_days)
    }
}

/// A branch selected by the age window, with its age at classification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionCandidate {
    pub branch: Branch,
    pub age_in_days: i64,
}

/// Whole days between `last_commit_date` and `now`, rounded down.
pub(crate) fn age_in_days(last_commit_date: i64, now: i64) -> i64 {
    (now - last_commit_date).div_euclid(SECONDS_PER_DAY)
}

/// Select local branches whose age falls inside `window`.
///
/// `now` is a single snapshot shared by every branch of the pass. Remote
/// records and `base_branch` are never candidates. Catalog order is kept.
pub fn classify_by_age(
    catalog: &Catalog,
    window: &AgeWindow,
    base_branch: &str,
    now: i64,
) -> Vec<DeletionCandidate> {
    catalog
        .iter()
        .filter(|branch| !branch.is_remote && branch.name != base_branch)
        .filter_map(|branch| {
            let age = age_in_days(branch.last_commit_date, now);
            window.contains(age).then(|| DeletionCandidate {
                branch: branch.clone(),
                age_in_days: age,
            })
        })
        .collect()
}

/// A compiled pattern selection request.
///
/// Constructing it validates the regex, so an invalid pattern fails before
/// any backend query is made.
#[derive(Debug, Clone)]
pub struct PatternQuery {
    regex: Regex,
    merged_only: bool,
    base_branch: String,
}

impl PatternQuery {
    pub fn new(pattern: &str, merged_only: bool, base_branch: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            KwgitError::ConfigError(format!("invalid branch pattern '{}': {}", pattern, e))
        })?;

        Ok(Self {
            regex,
            merged_only,
            base_branch: base_branch.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn merged_only(&self) -> bool {
        self.merged_only
    }

    pub fn base_branch(&self) -> &str {
        &self.base_branch
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Result of a pattern classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSelection {
    /// Every matching branch, in backend order, protected ones included.
    pub matching: Vec<Branch>,
    /// Matching branches that may be deleted.
    pub deletable: Vec<Branch>,
    /// Matching branches in the protected set.
    pub protected: Vec<Branch>,
    /// The checked-out branch, if it matched; never deletable.
    pub checked_out: Option<Branch>,
}

impl PatternSelection {
    pub fn is_empty(&self) -> bool {
        self.matching.is_empty()
    }
}

/// Select local branches whose name matches `query`.
///
/// With `merged_only`, candidates are the branches merged into the base
/// branch; a base branch that does not exist yields an empty selection and a
/// warning rather than an error.
pub fn classify_by_pattern(
    backend: &dyn BranchBackend,
    policy: &ProtectionPolicy,
    query: &PatternQuery,
) -> Result<PatternSelection> {
    let names = if query.merged_only {
        match backend.merged_branch_names(&query.base_branch) {
            Ok(names) => names,
            Err(KwgitError::BaseBranchNotFound(base)) => {
                tracing::warn!(
                    base = %base,
                    "base branch does not exist, nothing is merged into it"
                );
                Vec::new()
            }
            Err(e) => return Err(e),
        }
    } else {
        backend.list_local_refs()?
    };

    let matched: Vec<String> = names
        .into_iter()
        .filter(|name| query.matches(name))
        .collect();

    let mut selection = PatternSelection::default();
    if matched.is_empty() {
        return Ok(selection);
    }

    let current = backend.current_branch_name()?;

    for name in matched {
        let branch = resolve_local_branch(backend, policy, &name, &current)?;

        if branch.is_protected {
            selection.protected.push(branch.clone());
        } else if branch.is_current {
            selection.checked_out = Some(branch.clone());
        } else {
            selection.deletable.push(branch.clone());
        }
        selection.matching.push(branch);
    }

    Ok(selection)
}
