//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for kwgit.
///
/// Represents the contents of `.kwgit.yaml`. Every field is optional in
/// the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Branch names that may never be deleted (case-insensitive).
    #[serde(default = "default_protected_branches")]
    pub protected_branches: Vec<String>,

    /// Branch merge checks run against, and which `stale` never considers.
    #[serde(default = "default_base_branch")]
    pub base_branch: String,

    /// Remote used for remote listings and remote deletions.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Default lower bound (inclusive) of the stale age window, in days.
    #[serde(default = "default_stale_min_days")]
    pub stale_min_days: u32,

    /// Default upper bound (inclusive) of the stale age window, in days.
    #[serde(default = "default_stale_max_days")]
    pub stale_max_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protected_branches: default_protected_branches(),
            base_branch: default_base_branch(),
            remote: default_remote(),
            stale_min_days: default_stale_min_days(),
            stale_max_days: default_stale_max_days(),
        }
    }
}
