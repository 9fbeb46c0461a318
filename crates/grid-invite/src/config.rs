//! Invite configuration
//!
//! Layering, lowest to highest precedence: defaults, TOML file,
//! environment, explicit builder calls (the CLI uses these for flags).

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`InviteConfig::resource_root`]
pub const RESOURCE_ROOT_ENV: &str = "GRID_INVITE_RESOURCE_ROOT";

/// Invite configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InviteConfig {
    /// Directory containing `resources/providers/`
    pub resource_root: PathBuf,
    /// Cap on completion suggestions (`None` = unlimited)
    pub max_completions: Option<usize>,
}

impl InviteConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With resource root
    #[inline]
    #[must_use]
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = root.into();
        self
    }

    /// With completion cap
    #[inline]
    #[must_use]
    pub fn with_max_completions(mut self, max: Option<usize>) -> Self {
        self.max_completions = max;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Fails on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(RESOURCE_ROOT_ENV).filter(|v| !v.is_empty()) {
            self.resource_root = PathBuf::from(root);
        }
        self
    }
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            resource_root: PathBuf::from("."),
            max_completions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InviteConfig::new();
        assert_eq!(config.resource_root, Path::new("."));
        assert_eq!(config.max_completions, None);
    }

    #[test]
    fn from_toml_partial() {
        let config = InviteConfig::from_toml_str("max_completions = 8\n").unwrap();
        assert_eq!(config.max_completions, Some(8));
        assert_eq!(config.resource_root, Path::new("."));
    }

    #[test]
    fn from_toml_rejects_unknown_keys() {
        let err = InviteConfig::from_toml_str("colour = \"blue\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_resource_root() {
        let config = InviteConfig::new().with_overrides_from(|key| {
            (key == RESOURCE_ROOT_ENV).then(|| "/usr/share/gridsync".to_string())
        });
        assert_eq!(config.resource_root, Path::new("/usr/share/gridsync"));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let config = InviteConfig::new()
            .with_resource_root("/srv")
            .with_overrides_from(|_| Some(String::new()));
        assert_eq!(config.resource_root, Path::new("/srv"));
    }

    #[test]
    fn load_missing_file() {
        let err = InviteConfig::load("/nonexistent/grid-invite.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
