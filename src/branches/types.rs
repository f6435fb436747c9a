//! Branch records and the ordered catalog.

use serde::Serialize;

/// One branch as seen at catalog-build time.
///
/// A branch that exists both locally and on the remote yields two records
/// with the same `name` and different `is_remote` flags. Records are
/// read-only values; deleting a branch acts on the backend, never on the
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Simple branch name, without any `<remote>/` prefix.
    pub name: String,
    /// Best-guess creation time (Unix seconds).
    pub creation_date: i64,
    /// Committer date of the tip commit (Unix seconds), exactly as reported.
    pub last_commit_date: i64,
    /// Checked-out local branch. Always false for remote records.
    pub is_current: bool,
    /// Remote-tracking record.
    pub is_remote: bool,
    /// Name is in the protected set.
    pub is_protected: bool,
}

impl Branch {
    /// Prompt/report label, distinguishing remote records.
    pub fn label(&self) -> String {
        if self.is_remote {
            format!("{} (remote)", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Branches ordered by ascending `creation_date`.
///
/// Ties keep the order in which the backend enumerated them (locals first,
/// then remotes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    branches: Vec<Branch>,
}

impl Catalog {
    /// Build a catalog, sorting the given enumeration order stably.
    pub fn from_enumerated(mut branches: Vec<Branch>) -> Self {
        branches.sort_by_key(|branch| branch.creation_date);
        Self { branches }
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Branch> {
        self.branches.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Branch> {
        self.branches.iter()
    }
}

#[cfg(test)]
impl Catalog {
    pub fn as_slice(&self) -> &[Branch] {
        &self.branches
    }

    /// The checked-out local branch, if it is in the catalog.
    pub fn current(&self) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.is_current)
    }

    /// Local record with the given name.
    pub fn find_local(&self, name: &str) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|branch| !branch.is_remote && branch.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Branch;
    type IntoIter = std::slice::Iter<'a, Branch>;

    fn into_iter(self) -> Self::IntoIter {
        self.branches.iter()
    }
}
