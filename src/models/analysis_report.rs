// src/models/analysis_report.rs
use std::collections::BTreeMap;

/// Snapshot of descriptive statistics over one text.
///
/// Counts are stored; ratios are derived on demand so they can never drift
/// out of sync with the counts they come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub character_count: usize,
    pub word_count: usize,
    pub unique_characters: usize,
    pub unique_words: usize,
    pub alphabetic_count: usize,
    pub digit_count: usize,
    pub punctuation_count: usize,
    pub space_count: usize,
    pub vowel_count: usize,
    /// Sum of the char lengths of every word.
    pub total_word_length: usize,
    pub words_starting_with_vowel: usize,
    pub longest_word: Option<String>,
    pub shortest_word: Option<String>,
    pub most_common_word: Option<(String, usize)>,
    pub palindromes: Vec<String>,
    pub all_lowercase: bool,
    pub has_long_word: bool,
    pub word_frequency: BTreeMap<String, usize>,
    /// Normalized words by count, ties in order of first appearance.
    pub ranked_words: Vec<(String, usize)>,
    pub word_length_distribution: BTreeMap<usize, usize>,
    pub letter_frequency: BTreeMap<char, usize>,
}

#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}

impl AnalysisReport {
    #[inline]
    #[must_use]
    pub fn average_word_length(&self) -> f64 {
        ratio(self.total_word_length, self.word_count)
    }

    /// Vowels as a share of alphabetic characters.
    #[inline]
    #[must_use]
    pub fn vowel_percentage(&self) -> f64 {
        ratio(self.vowel_count, self.alphabetic_count) * 100.0
    }

    /// Letters as a share of all characters, whitespace and punctuation included.
    #[inline]
    #[must_use]
    pub fn letter_percentage(&self) -> f64 {
        ratio(self.alphabetic_count, self.character_count) * 100.0
    }

    #[inline]
    #[must_use]
    pub fn digit_percentage(&self) -> f64 {
        ratio(self.digit_count, self.character_count) * 100.0
    }

    #[inline]
    #[must_use]
    pub fn space_percentage(&self) -> f64 {
        ratio(self.space_count, self.character_count) * 100.0
    }

    /// The `n` most frequent words. Equal counts keep reading order.
    #[inline]
    #[must_use]
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        self.ranked_words
            .iter()
            .take(n)
            .map(|(word, count)| (word.as_str(), *count))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.character_count == 0
    }
}
