//! Error types for invite handling
//!
//! Validation itself never fails loudly: [`crate::is_valid`] answers with a
//! boolean. These types exist for callers that want the reason, and for the
//! places where the filesystem or configuration can genuinely go wrong.

use std::path::PathBuf;

/// Why a string is not a well-formed cheatcode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheatcodeError {
    /// Code did not split into exactly three tokens
    #[error("expected 3 '-'-separated tokens, got {0}")]
    WrongTokenCount(usize),

    /// First token is not a run of decimal digits
    #[error("index '{0}' is not a decimal number")]
    NonNumericIndex(String),

    /// A word token is missing from the wordlist
    #[error("word {position} ('{word}') is not in the wordlist")]
    UnknownWord { position: usize, word: String },
}

impl CheatcodeError {
    /// Create unknown word error
    pub fn unknown_word(position: usize, word: impl Into<String>) -> Self {
        Self::UnknownWord {
            position,
            word: word.into(),
        }
    }
}

/// Errors reading a provider settings file
///
/// A missing file is not an error; lookups report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// File exists but could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not a JSON object
    #[error("corrupt provider settings in {path}: {message}")]
    Corrupt { path: PathBuf, message: String },
}

impl ProviderError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create corrupt-content error for path
    pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Path of the offending settings file
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Corrupt { path, .. } => path,
        }
    }
}

/// Errors loading [`crate::InviteConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Combined invite error
#[derive(Debug, thiserror::Error)]
pub enum InviteError {
    /// Input is not a well-formed cheatcode
    #[error("invalid invite code: {0}")]
    InvalidCode(#[from] CheatcodeError),

    /// Provider cheatcode with no settings file
    #[error("no settings for provider '{0}'")]
    UnknownProvider(String),

    /// Settings file present but unusable
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for invite operations
pub type InviteResult<T> = Result<T, InviteError>;
