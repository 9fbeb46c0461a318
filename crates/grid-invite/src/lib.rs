//! Grid Invite
//!
//! Invite cheatcodes and provider settings for a storage-grid client.
//!
//! # Overview
//!
//! - **Cheatcode**: `<index>-<word>-<word>`, words from a [`Wordlist`]
//! - **CheatcodeValidator**: pure grammar predicate over an injected wordlist
//! - **ProviderSettingsResolver**: `resources/providers/<name>.json` lookup
//! - **InviteResolver**: validate → route → resolve
//! - **CheatcodeCompleter**: word completion while a code is typed
//!
//! # Example
//!
//! ```rust
//! use grid_invite::{is_valid, ProviderSettingsResolver};
//!
//! assert!(is_valid("1-cranky-tapeworm"));
//! assert!(!is_valid("topmost-vagabond"));
//!
//! // Missing resources are absence, not an error
//! let resolver = ProviderSettingsResolver::new("/nonexistent");
//! assert!(resolver.resolve("test-test").is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cheatcode;
pub mod completion;
pub mod config;
pub mod error;
pub mod invite;
pub mod provider;
pub mod wordlist;

// Re-exports
pub use cheatcode::{is_valid, normalize, Cheatcode, CheatcodeValidator, DELIMITER};
pub use completion::CheatcodeCompleter;
pub use config::{InviteConfig, RESOURCE_ROOT_ENV};
pub use error::{CheatcodeError, ConfigError, InviteError, InviteResult, ProviderError};
pub use invite::{InviteResolver, InviteRoute, PROVIDER_INDEX};
pub use provider::{
    get_settings_from_cheatcode, provider_name, ProviderSettings, ProviderSettingsResolver,
};
pub use wordlist::{PgpWordlist, WordSet, Wordlist};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for invite handling
    pub use crate::{
        is_valid, Cheatcode, CheatcodeCompleter, CheatcodeValidator, InviteConfig, InviteError,
        InviteResolver, InviteRoute, PgpWordlist, ProviderSettings, ProviderSettingsResolver,
        Wordlist,
    };
}
