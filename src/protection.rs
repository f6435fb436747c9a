//! Protected branch policy.
//!
//! A protected branch is exempt from every deletion path. The protected set
//! is resolved once at startup into a [`ProtectionConfig`] and handed to
//! [`ProtectionPolicy::new`]; nothing here reads the environment on its own.

/// Environment variable overriding the protected branch list.
pub const PROTECTED_BRANCHES_ENV: &str = "KWGIT_PROTECTED_BRANCHES";

/// Branch names protected when nothing else is configured.
pub const DEFAULT_PROTECTED_BRANCHES: [&str; 2] = ["main", "master"];

/// The set of protected branch names, stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectionConfig {
    names: Vec<String>,
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self::from_names(DEFAULT_PROTECTED_BRANCHES)
    }
}

impl ProtectionConfig {
    /// Build a config from explicit names. Blank entries are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Parse a comma-separated override such as `"main, develop,release"`.
    ///
    /// Returns `None` when the value is blank, so the caller keeps its default.
    pub fn from_list(value: &str) -> Option<Self> {
        let config = Self::from_names(value.split(','));
        if config.names.is_empty() {
            None
        } else {
            Some(config)
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Decides whether a branch name is protected.
///
/// Matching is exact and case-insensitive. The policy holds no interior
/// state, so a shared reference can be used from anywhere.
#[derive(Debug, Clone, Default)]
pub struct ProtectionPolicy {
    config: ProtectionConfig,
}

impl ProtectionPolicy {
    pub fn new(config: ProtectionConfig) -> Self {
        Self { config }
    }

    pub fn is_protected(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.config.names.iter().any(|protected| *protected == name)
    }

    pub fn config(&self) -> &ProtectionConfig {
        &self.config
    }
}
