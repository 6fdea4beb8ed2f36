// src/core/cipher/scoring.rs
use std::collections::HashSet;

use crate::core::analyzer::words::normalized_words;

/// Common English words a correct decryption is expected to contain.
pub const DEFAULT_WORDS: &[&str] = &[
    "the", "and", "is", "message", "secret", "to", "of", "in", "for", "on", "with", "at", "by",
    "from", "this",
];

/// Match count at which a candidate is considered readable English.
pub const DEFAULT_MIN_MATCHES: usize = 3;

/// Rates how plausible a candidate plaintext is. Higher is better.
pub trait Scorer {
    fn score(&self, text: &str) -> f64;
}

/// A reference set of known words, matched exactly and case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl Default for WordList {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}

impl WordList {
    #[inline]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Adds more words to the list.
    #[inline]
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words in `text` that appear in the list.
    #[inline]
    #[must_use]
    pub fn count_matches(&self, text: &str) -> usize {
        normalized_words(text).filter(|w| self.words.contains(w)).count()
    }

    #[inline]
    #[must_use]
    pub fn looks_like_english(&self, text: &str, min_matches: usize) -> bool {
        self.count_matches(text) >= min_matches
    }
}

impl Scorer for WordList {
    /// Fraction of the words in `text` found in the list, in `[0, 1]`.
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    fn score(&self, text: &str) -> f64 {
        let (total, matches) =
            normalized_words(text).fold((0_usize, 0_usize), |(total, matches), w| {
                (
                    total.saturating_add(1),
                    matches.saturating_add(usize::from(self.words.contains(&w))),
                )
            });
        if total == 0 {
            return 0.0;
        }
        matches as f64 / total as f64
    }
}
