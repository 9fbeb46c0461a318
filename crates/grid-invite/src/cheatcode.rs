//! Cheatcode grammar
//!
//! A cheatcode is `<index>-<word>-<word>`: a run of decimal digits followed
//! by two words from a [`Wordlist`]. Nothing else about the tokens is
//! interpreted here; routing on the index happens in [`crate::invite`].

use crate::error::CheatcodeError;
use crate::wordlist::{PgpWordlist, Wordlist};
use std::fmt;

/// Token separator
pub const DELIMITER: char = '-';

/// True if `token` is a non-empty run of ASCII decimal digits
#[inline]
#[must_use]
pub fn is_index(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Canonical form of user input
///
/// Lower-cases and splits on whitespace and [`DELIMITER`], dropping empty
/// chunks, then joins with [`DELIMITER`]. `1 - Cranky - tapeworm` becomes
/// `1-cranky-tapeworm`. Validation never calls this; callers opt in.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .split(|c: char| c == DELIMITER || c.is_whitespace())
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Well-formed cheatcode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cheatcode {
    index: String,
    words: [String; 2],
}

impl Cheatcode {
    /// Parse `code` against `wordlist`
    ///
    /// # Errors
    /// Returns the first grammar rule the code breaks, checked in order:
    /// token count, numeric index, first word, second word.
    pub fn parse<W: Wordlist + ?Sized>(code: &str, wordlist: &W) -> Result<Self, CheatcodeError> {
        let tokens: Vec<&str> = code.split(DELIMITER).collect();
        let &[index, first, second] = tokens.as_slice() else {
            return Err(CheatcodeError::WrongTokenCount(tokens.len()));
        };

        if !is_index(index) {
            return Err(CheatcodeError::NonNumericIndex(index.to_string()));
        }
        for (position, word) in [(1, first), (2, second)] {
            if !wordlist.contains(word) {
                return Err(CheatcodeError::unknown_word(position, word));
            }
        }

        Ok(Self {
            index: index.to_string(),
            words: [first.to_string(), second.to_string()],
        })
    }

    /// Index token, as typed (leading zeros preserved)
    #[inline]
    #[must_use]
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Index token as a number, if it fits in `u64`
    #[must_use]
    pub fn index_value(&self) -> Option<u64> {
        self.index.parse().ok()
    }

    /// The two word tokens
    #[inline]
    #[must_use]
    pub fn words(&self) -> [&str; 2] {
        [&self.words[0], &self.words[1]]
    }

    /// Word tokens joined with the delimiter, e.g. `cranky-tapeworm`
    #[must_use]
    pub fn word_part(&self) -> String {
        format!("{}{DELIMITER}{}", self.words[0], self.words[1])
    }
}

impl fmt::Display for Cheatcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.index, self.word_part())
    }
}

/// Cheatcode predicate over an injected wordlist
#[derive(Debug, Clone, Default)]
pub struct CheatcodeValidator<W = PgpWordlist> {
    wordlist: W,
}

impl<W: Wordlist> CheatcodeValidator<W> {
    /// Create validator over `wordlist`
    #[inline]
    #[must_use]
    pub fn new(wordlist: W) -> Self {
        Self { wordlist }
    }

    /// True iff `code` is a well-formed cheatcode
    #[inline]
    #[must_use]
    pub fn is_valid(&self, code: &str) -> bool {
        self.parse(code).is_ok()
    }

    /// Parse `code`, reporting why it is rejected
    ///
    /// # Errors
    /// See [`Cheatcode::parse`].
    pub fn parse(&self, code: &str) -> Result<Cheatcode, CheatcodeError> {
        Cheatcode::parse(code, &self.wordlist)
    }

    /// Underlying wordlist
    #[inline]
    #[must_use]
    pub fn wordlist(&self) -> &W {
        &self.wordlist
    }
}

/// True iff `code` is a well-formed cheatcode over the PGP wordlist
#[must_use]
pub fn is_valid(code: &str) -> bool {
    Cheatcode::parse(code, &PgpWordlist).is_ok()
}
