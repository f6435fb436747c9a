//! Config loading, validation, and protection resolution.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{KwgitError, Result};
use crate::protection::ProtectionConfig;
use std::path::Path;

impl Config {
    /// Load `.kwgit.yaml` from the repository root.
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is
    /// a `ConfigError`.
    pub fn load_from_repo<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            KwgitError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| KwgitError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `base_branch` and `remote` must be non-empty
    /// - `stale_min_days` must not exceed `stale_max_days`
    pub fn validate(&self) -> Result<()> {
        if self.base_branch.trim().is_empty() {
            return Err(KwgitError::ConfigError("base_branch must not be empty".to_string()));
        }

        if self.remote.trim().is_empty() {
            return Err(KwgitError::ConfigError("remote must not be empty".to_string()));
        }

        if self.stale_min_days > self.stale_max_days {
            return Err(KwgitError::ConfigError(format!(
                "stale_min_days ({}) must not exceed stale_max_days ({})",
                self.stale_min_days, self.stale_max_days
            )));
        }

        Ok(())
    }

    /// Resolve the protected branch set.
    ///
    /// A non-blank `env_override` (the value of `KWGIT_PROTECTED_BRANCHES`)
    /// replaces the configured list entirely.
    pub fn protection(&self, env_override: Option<&str>) -> ProtectionConfig {
        env_override
            .and_then(ProtectionConfig::from_list)
            .unwrap_or_else(|| ProtectionConfig::from_names(&self.protected_branches))
    }
}
