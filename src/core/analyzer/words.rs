// src/core/analyzer/words.rs
use std::collections::{BTreeMap, HashMap};

/// Whitespace-delimited tokens, exactly as they appear in the text.
#[inline]
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Lower-cased tokens with ASCII punctuation stripped from both ends.
/// Tokens made only of punctuation are dropped.
#[inline]
pub fn normalized_words(text: &str) -> impl Iterator<Item = String> + '_ {
    tokens(text)
        .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Longest token; the first one wins a tie.
#[inline]
#[must_use]
pub fn longest_word(text: &str) -> Option<&str> {
    tokens(text).reduce(|best, word| {
        if char_len(word) > char_len(best) {
            word
        } else {
            best
        }
    })
}

/// Shortest token; the first one wins a tie.
#[inline]
#[must_use]
pub fn shortest_word(text: &str) -> Option<&str> {
    tokens(text).reduce(|best, word| {
        if char_len(word) < char_len(best) {
            word
        } else {
            best
        }
    })
}

/// Occurrences of each normalized word.
#[inline]
#[must_use]
pub fn word_frequency(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in normalized_words(text) {
        let count = counts.entry(word).or_insert(0_usize);
        *count = count.saturating_add(1);
    }
    counts
}

/// How many tokens have each char length.
#[inline]
#[must_use]
pub fn word_length_distribution(text: &str) -> BTreeMap<usize, usize> {
    let mut lengths = BTreeMap::new();
    for word in tokens(text) {
        let count = lengths.entry(char_len(word)).or_insert(0_usize);
        *count = count.saturating_add(1);
    }
    lengths
}

/// Normalized words with their counts, most frequent first. Words with equal
/// counts stay in the order they first appear in the text.
#[inline]
#[must_use]
pub fn ranked_words(text: &str) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for word in normalized_words(text) {
        if let Some(entry) = positions.get(&word).and_then(|&i| ranked.get_mut(i)) {
            entry.1 = entry.1.saturating_add(1);
        } else {
            positions.insert(word.clone(), ranked.len());
            ranked.push((word, 1));
        }
    }
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Most frequent normalized word; the first one seen wins a tie.
#[inline]
#[must_use]
pub fn most_common_word(text: &str) -> Option<(String, usize)> {
    ranked_words(text).into_iter().next()
}

/// Tokens whose letters read the same backwards, ignoring case and
/// non-letters. Single letters do not count.
#[inline]
#[must_use]
pub fn palindromes(text: &str) -> Vec<String> {
    tokens(text)
        .filter(|word| {
            let letters: Vec<char> = word
                .chars()
                .filter(|c| c.is_alphabetic())
                .flat_map(char::to_lowercase)
                .collect();
            letters.len() > 1 && letters.iter().eq(letters.iter().rev())
        })
        .map(str::to_owned)
        .collect()
}
