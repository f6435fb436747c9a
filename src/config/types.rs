//! Defaults used by the Config struct.

use crate::protection::DEFAULT_PROTECTED_BRANCHES;

/// Config file name, looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".kwgit.yaml";

pub(crate) fn default_protected_branches() -> Vec<String> {
    DEFAULT_PROTECTED_BRANCHES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

pub(crate) fn default_base_branch() -> String {
    "main".to_string()
}

pub(crate) fn default_remote() -> String {
    "origin".to_string()
}

pub(crate) fn default_stale_min_days() -> u32 {
    30
}

pub(crate) fn default_stale_max_days() -> u32 {
    365
}
