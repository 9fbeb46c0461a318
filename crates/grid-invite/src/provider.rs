//! Provider settings lookup
//!
//! Providers ship as JSON files under `<root>/resources/providers/`. A
//! cheatcode names a provider by its word part, so `0-test-test` and
//! `test-test` both resolve to `resources/providers/test-test.json`.
//!
//! Lookups distinguish three outcomes:
//! - `Ok(Some(settings))`: file present and a JSON object
//! - `Ok(None)`: no such file (or no providers directory at all)
//! - `Err(ProviderError)`: file present but unreadable or corrupt
//!
//! [`ProviderSettingsResolver::resolve`] folds the last case into `None`.

use crate::cheatcode::{is_index, DELIMITER};
use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory, relative to the resource root, holding provider files
pub const PROVIDERS_DIR: [&str; 2] = ["resources", "providers"];

/// Extension of provider settings files
pub const SETTINGS_EXTENSION: &str = "json";

/// Connection settings for one provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderSettings {
    entries: Map<String, Value>,
}

impl ProviderSettings {
    /// Wrap an existing JSON object
    #[inline]
    #[must_use]
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Parse settings from JSON text
    ///
    /// # Errors
    /// Fails if the text is not JSON or its root is not an object; `path`
    /// is only used for the error message.
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ProviderError> {
        Self::from_slice(content.as_bytes(), path)
    }

    /// Parse settings from raw file bytes
    ///
    /// Bytes that are not UTF-8 are corrupt content, like any other JSON
    /// syntax error.
    ///
    /// # Errors
    /// See [`Self::from_json`].
    pub fn from_slice(content: &[u8], path: &Path) -> Result<Self, ProviderError> {
        match serde_json::from_slice(content) {
            Ok(Value::Object(entries)) => Ok(Self { entries }),
            Ok(other) => Err(ProviderError::corrupt(
                path,
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
            Err(e) => Err(ProviderError::corrupt(path, format!("JSON parse error: {e}"))),
        }
    }

    /// Raw value for `key`
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// String value for `key`; `None` if absent or not a string
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Introducer fURL
    #[must_use]
    pub fn introducer(&self) -> Option<&str> {
        self.get_str("introducer")
    }

    /// Display name of the provider
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.get_str("nickname")
    }

    /// Number of top-level keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the underlying object
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Take the underlying object
    #[inline]
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Provider identifier named by `code`
///
/// A leading numeric index is dropped when something follows it; anything
/// else is used as-is. Returns `None` for names that could escape the
/// providers directory.
#[must_use]
pub fn provider_name(code: &str) -> Option<&str> {
    let name = match code.split_once(DELIMITER) {
        Some((index, rest)) if is_index(index) => rest,
        _ => code,
    };
    is_safe_name(name).then_some(name)
}

fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\', '\0'])
}

/// Resolves cheatcodes to provider settings under a resource root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettingsResolver {
    root: PathBuf,
}

impl ProviderSettingsResolver {
    /// Create resolver rooted at `root` (the directory containing `resources/`)
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resource root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding provider settings files
    #[must_use]
    pub fn providers_dir(&self) -> PathBuf {
        PROVIDERS_DIR.iter().fold(self.root.clone(), |dir, part| dir.join(part))
    }

    /// Settings file for provider `name`
    #[must_use]
    pub fn settings_path(&self, name: &str) -> PathBuf {
        self.providers_dir().join(format!("{name}.{SETTINGS_EXTENSION}"))
    }

    /// Look up settings for `code`, keeping absent and corrupt apart
    ///
    /// # Errors
    /// Returns [`ProviderError`] when the settings file exists but cannot be
    /// read or is not a JSON object.
    pub fn lookup(&self, code: &str) -> Result<Option<ProviderSettings>, ProviderError> {
        match provider_name(code) {
            Some(name) => self.lookup_provider(name),
            None => {
                tracing::debug!("Rejected provider name in code {:?}", code);
                Ok(None)
            }
        }
    }

    /// Look up settings for provider `name` (no index stripping)
    ///
    /// # Errors
    /// See [`Self::lookup`].
    pub fn lookup_provider(&self, name: &str) -> Result<Option<ProviderSettings>, ProviderError> {
        if !is_safe_name(name) {
            return Ok(None);
        }

        let path = self.settings_path(name);
        let content = match std::fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No provider settings at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(ProviderError::io_error(path, e)),
        };

        let settings = ProviderSettings::from_slice(&content, &path)?;
        tracing::debug!("Loaded {} settings for provider '{}'", settings.len(), name);
        Ok(Some(settings))
    }

    /// Settings for `code`, or `None` if there are none usable
    ///
    /// Corrupt or unreadable files are logged and treated as absent.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<ProviderSettings> {
        self.lookup(code).unwrap_or_else(|e| {
            tracing::warn!("Ignoring provider settings: {}", e);
            None
        })
    }

    /// Identifiers of every provider file, sorted
    ///
    /// # Errors
    /// Fails if the providers directory exists but cannot be listed.
    pub fn providers(&self) -> Result<Vec<String>, ProviderError> {
        let dir = self.providers_dir();
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ProviderError::io_error(dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ProviderError::io_error(&dir, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SETTINGS_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_safe_name(stem) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort_unstable();
        Ok(names)
    }
}

/// Settings for `cheatcode` under resource root `root`
///
/// Shorthand for [`ProviderSettingsResolver::resolve`].
#[must_use]
pub fn get_settings_from_cheatcode(
    root: impl AsRef<Path>,
    cheatcode: &str,
) -> Option<ProviderSettings> {
    ProviderSettingsResolver::new(root.as_ref()).resolve(cheatcode)
}
