//! Word completion for partially typed cheatcodes

use crate::cheatcode::{is_index, DELIMITER};
use crate::wordlist::{PgpWordlist, Wordlist};

/// Suggests full codes for a partially typed one
///
/// Only the last token is completed, and only once everything before it is
/// already acceptable: `1-cra` offers `1-cranky` etc., `1-cranky-tap`
/// offers `1-cranky-tapeworm`. While the index is still being typed there
/// is nothing to suggest.
#[derive(Debug, Clone, Default)]
pub struct CheatcodeCompleter<W = PgpWordlist> {
    wordlist: W,
    limit: Option<usize>,
}

impl<W: Wordlist> CheatcodeCompleter<W> {
    /// Create completer over `wordlist`
    #[inline]
    #[must_use]
    pub fn new(wordlist: W) -> Self {
        Self { wordlist, limit: None }
    }

    /// Cap the number of suggestions
    #[inline]
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Completions of `partial`, in wordlist order
    #[must_use]
    pub fn complete(&self, partial: &str) -> Vec<String> {
        let Some((head, prefix)) = partial.rsplit_once(DELIMITER) else {
            return Vec::new();
        };
        if !self.head_is_complete(head) {
            return Vec::new();
        }

        self.wordlist
            .words()
            .filter(|word| word.starts_with(prefix))
            .take(self.limit.unwrap_or(usize::MAX))
            .map(|word| format!("{head}{DELIMITER}{word}"))
            .collect()
    }

    fn head_is_complete(&self, head: &str) -> bool {
        match head.split_once(DELIMITER) {
            None => is_index(head),
            Some((index, word)) => is_index(index) && self.wordlist.contains(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordSet;

    fn completer() -> CheatcodeCompleter<WordSet> {
        CheatcodeCompleter::new(WordSet::from_iter(["crank", "cranky", "tapeworm", "topmost"]))
    }

    #[test]
    fn completes_first_word() {
        assert_eq!(completer().complete("1-cra"), vec!["1-crank", "1-cranky"]);
    }

    #[test]
    fn completes_second_word() {
        assert_eq!(
            completer().complete("1-cranky-t"),
            vec!["1-cranky-tapeworm", "1-cranky-topmost"]
        );
    }

    #[test]
    fn empty_prefix_offers_everything() {
        assert_eq!(completer().complete("7-").len(), 4);
    }

    #[test]
    fn nothing_while_typing_index() {
        assert!(completer().complete("1").is_empty());
        assert!(completer().complete("").is_empty());
    }

    #[test]
    fn nothing_after_bad_head() {
        assert!(completer().complete("x-cra").is_empty());
        assert!(completer().complete("1-wasabi-t").is_empty());
        assert!(completer().complete("1-cranky-tapeworm-t").is_empty());
    }

    #[test]
    fn limit_caps_suggestions() {
        let completer = completer().with_limit(Some(1));
        assert_eq!(completer.complete("1-"), vec!["1-crank"]);
    }

    #[test]
    fn default_uses_pgp_list() {
        let completer = CheatcodeCompleter::new(PgpWordlist);
        assert_eq!(completer.complete("1-cranky-tapew"), vec!["1-cranky-tapeworm"]);
    }
}
