// src/core/analyzer.rs
pub mod words;

use std::collections::{BTreeMap, HashSet};

use crate::models::AnalysisReport;
use words::{
    longest_word, palindromes, ranked_words, shortest_word, tokens, word_frequency,
    word_length_distribution,
};

const VOWELS: &str = "aeiouAEIOU";

/// Words longer than this many chars count as long.
pub const LONG_WORD_THRESHOLD: usize = 7;

#[inline]
fn is_vowel(ch: char) -> bool {
    VOWELS.contains(ch)
}

/// Computes every statistic in [`AnalysisReport`] for `text`.
///
/// Empty or letterless text is valid input: counts come back as zero,
/// extremes as `None`, and every ratio as `0.0`.
#[inline]
#[must_use]
pub fn analyze(text: &str) -> AnalysisReport {
    let mut character_count: usize = 0;
    let mut alphabetic_count: usize = 0;
    let mut digit_count: usize = 0;
    let mut punctuation_count: usize = 0;
    let mut space_count: usize = 0;
    let mut vowel_count: usize = 0;
    let mut unique_characters = HashSet::new();
    let mut letter_frequency: BTreeMap<char, usize> = BTreeMap::new();

    for ch in text.chars() {
        character_count = character_count.saturating_add(1);
        unique_characters.insert(ch);

        if ch.is_alphabetic() {
            alphabetic_count = alphabetic_count.saturating_add(1);
            for lower in ch.to_lowercase() {
                let count = letter_frequency.entry(lower).or_insert(0);
                *count = count.saturating_add(1);
            }
        }
        if is_vowel(ch) {
            vowel_count = vowel_count.saturating_add(1);
        }
        if ch.is_numeric() {
            digit_count = digit_count.saturating_add(1);
        }
        if ch.is_ascii_punctuation() {
            punctuation_count = punctuation_count.saturating_add(1);
        }
        if ch == ' ' {
            space_count = space_count.saturating_add(1);
        }
    }

    let mut word_count: usize = 0;
    let mut total_word_length: usize = 0;
    let mut words_starting_with_vowel: usize = 0;
    let mut all_lowercase = true;
    let mut has_long_word = false;

    for word in tokens(text) {
        let length = word.chars().count();
        word_count = word_count.saturating_add(1);
        total_word_length = total_word_length.saturating_add(length);

        if word.chars().next().is_some_and(is_vowel) {
            words_starting_with_vowel = words_starting_with_vowel.saturating_add(1);
        }
        if word.chars().any(char::is_uppercase) {
            all_lowercase = false;
        }
        if length > LONG_WORD_THRESHOLD {
            has_long_word = true;
        }
    }

    let ranked_words = ranked_words(text);
    let unique_words = count_unique_words(text);

    AnalysisReport {
        character_count,
        word_count,
        unique_characters: unique_characters.len(),
        unique_words,
        alphabetic_count,
        digit_count,
        punctuation_count,
        space_count,
        vowel_count,
        total_word_length,
        words_starting_with_vowel,
        longest_word: longest_word(text).map(str::to_owned),
        shortest_word: shortest_word(text).map(str::to_owned),
        most_common_word: ranked_words.first().cloned(),
        palindromes: palindromes(text),
        all_lowercase,
        has_long_word,
        word_length_distribution: word_length_distribution(text),
        word_frequency: word_frequency(text),
        ranked_words,
        letter_frequency,
    }
}

/// Number of characters, whitespace and punctuation included.
#[inline]
#[must_use]
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

#[inline]
#[must_use]
pub fn count_words(text: &str) -> usize {
    tokens(text).count()
}

/// Distinct characters, case-sensitive.
#[inline]
#[must_use]
pub fn count_unique_characters(text: &str) -> usize {
    text.chars().collect::<HashSet<_>>().len()
}

/// Distinct words, case-insensitive. Punctuation is part of the word, so
/// `hello,` and `hello` are different words.
#[inline]
#[must_use]
pub fn count_unique_words(text: &str) -> usize {
    tokens(text).map(str::to_lowercase).collect::<HashSet<_>>().len()
}

#[inline]
#[must_use]
pub fn average_word_length(text: &str) -> f64 {
    analyze(text).average_word_length()
}

#[inline]
#[must_use]
pub fn vowel_percentage(text: &str) -> f64 {
    analyze(text).vowel_percentage()
}

#[inline]
#[must_use]
pub fn letter_percentage(text: &str) -> f64 {
    analyze(text).letter_percentage()
}
