//! Invite routing
//!
//! Ties the grammar to the provider lookup. Codes with index `0` are local
//! provider cheatcodes and are answered from the resource directory; every
//! other valid code belongs to the remote invite exchange, which lives
//! outside this crate.

use crate::cheatcode::{normalize, Cheatcode, CheatcodeValidator};
use crate::completion::CheatcodeCompleter;
use crate::config::InviteConfig;
use crate::error::{InviteError, InviteResult};
use crate::provider::{ProviderSettings, ProviderSettingsResolver};
use crate::wordlist::{PgpWordlist, Wordlist};
use serde::Serialize;

/// Index reserved for local provider cheatcodes
pub const PROVIDER_INDEX: &str = "0";

/// Where a valid invite code leads
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum InviteRoute {
    /// Settings shipped with the client for a named provider
    Provider {
        name: String,
        settings: ProviderSettings,
    },
    /// Code must be exchanged with the invite server
    Wormhole { code: String },
}

/// Validates, routes, and resolves invite codes
#[derive(Debug, Clone)]
pub struct InviteResolver<W = PgpWordlist> {
    validator: CheatcodeValidator<W>,
    providers: ProviderSettingsResolver,
}

impl InviteResolver<PgpWordlist> {
    /// Create resolver from configuration, using the PGP wordlist
    #[must_use]
    pub fn from_config(config: &InviteConfig) -> Self {
        Self::new(PgpWordlist, ProviderSettingsResolver::new(&config.resource_root))
    }
}

impl<W: Wordlist> InviteResolver<W> {
    /// Create resolver from parts
    #[inline]
    #[must_use]
    pub fn new(wordlist: W, providers: ProviderSettingsResolver) -> Self {
        Self {
            validator: CheatcodeValidator::new(wordlist),
            providers,
        }
    }

    /// Grammar check
    #[inline]
    #[must_use]
    pub fn validator(&self) -> &CheatcodeValidator<W> {
        &self.validator
    }

    /// Provider lookup
    #[inline]
    #[must_use]
    pub fn providers(&self) -> &ProviderSettingsResolver {
        &self.providers
    }

    /// Resolve user input to an invite route
    ///
    /// Input is normalized first, so `" 0 Test Test "` is read as
    /// `0-test-test`.
    ///
    /// # Errors
    /// - [`InviteError::InvalidCode`] if the input is not a cheatcode
    /// - [`InviteError::UnknownProvider`] if a provider code has no settings
    /// - [`InviteError::Provider`] if its settings file is corrupt
    pub fn resolve_invite(&self, input: &str) -> InviteResult<InviteRoute> {
        let code = self.validator.parse(&normalize(input))?;
        tracing::debug!("Resolving invite code with index {}", code.index());

        if code.index() != PROVIDER_INDEX {
            return Ok(InviteRoute::Wormhole {
                code: code.to_string(),
            });
        }

        let name = code.word_part();
        match self.providers.lookup_provider(&name)? {
            Some(settings) => Ok(InviteRoute::Provider { name, settings }),
            None => Err(InviteError::UnknownProvider(name)),
        }
    }

    /// Parse without routing
    ///
    /// # Errors
    /// See [`Cheatcode::parse`].
    pub fn parse(&self, input: &str) -> InviteResult<Cheatcode> {
        Ok(self.validator.parse(&normalize(input))?)
    }
}

impl<W: Wordlist + Clone> InviteResolver<W> {
    /// Completer sharing this resolver's wordlist
    #[must_use]
    pub fn completer(&self, limit: Option<usize>) -> CheatcodeCompleter<W> {
        CheatcodeCompleter::new(self.validator.wordlist().clone()).with_limit(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheatcodeError;
    use crate::wordlist::WordSet;

    fn resolver() -> InviteResolver<WordSet> {
        InviteResolver::new(
            WordSet::from_iter(["test", "cranky", "tapeworm"]),
            ProviderSettingsResolver::new("/nonexistent/grid-invite"),
        )
    }

    #[test]
    fn nonzero_index_routes_to_wormhole() {
        let route = resolver().resolve_invite("1-Cranky-Tapeworm").unwrap();
        assert_eq!(
            route,
            InviteRoute::Wormhole {
                code: "1-cranky-tapeworm".into()
            }
        );
    }

    #[test]
    fn spaced_delimiters_are_normalized() {
        let route = resolver().resolve_invite("1 - cranky - tapeworm").unwrap();
        assert_eq!(
            route,
            InviteRoute::Wormhole {
                code: "1-cranky-tapeworm".into()
            }
        );
    }

    #[test]
    fn leading_zeros_are_not_provider_index() {
        let route = resolver().resolve_invite("00-cranky-tapeworm").unwrap();
        assert!(matches!(route, InviteRoute::Wormhole { .. }));
    }

    #[test]
    fn invalid_code_is_error() {
        let err = resolver().resolve_invite("topmost-vagabond").unwrap_err();
        assert!(matches!(err, InviteError::InvalidCode(CheatcodeError::WrongTokenCount(2))));
    }

    #[test]
    fn missing_provider_is_unknown() {
        let err = resolver().resolve_invite("0-test-test").unwrap_err();
        assert!(matches!(err, InviteError::UnknownProvider(ref name) if name == "test-test"));
    }

    #[test]
    fn route_serializes_with_tag() {
        let route = InviteRoute::Wormhole { code: "1-a-b".into() };
        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            serde_json::json!({"route": "wormhole", "code": "1-a-b"})
        );
    }

    #[test]
    fn completer_shares_wordlist() {
        let completer = resolver().completer(None);
        assert_eq!(completer.complete("0-te"), vec!["0-test"]);
    }
}
