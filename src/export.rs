// src/export.rs
use anyhow::{Context as _, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{AnalysisReport, Shift};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    #[inline]
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Rounds to one decimal place.
#[inline]
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Serializable view of an [`AnalysisReport`] with fixed field names.
/// Ratios are rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedAnalysis {
    pub character_count: usize,
    pub word_count: usize,
    pub unique_characters: usize,
    pub unique_words: usize,
    pub alphabetic_count: usize,
    pub digit_count: usize,
    pub punctuation_count: usize,
    pub vowel_count: usize,
    pub words_starting_with_vowel: usize,
    pub longest_word: Option<String>,
    pub shortest_word: Option<String>,
    pub average_word_length: f64,
    pub vowel_percentage: f64,
    pub letter_percentage: f64,
    pub digit_percentage: f64,
    pub space_percentage: f64,
    pub all_lowercase: bool,
    pub has_long_word: bool,
    pub most_common_word: Option<WordCount>,
    pub palindromes: Vec<String>,
    pub word_frequency: BTreeMap<String, usize>,
    pub word_length_distribution: BTreeMap<usize, usize>,
    pub letter_frequency: BTreeMap<char, usize>,
}

impl From<&AnalysisReport> for ExportedAnalysis {
    #[inline]
    fn from(report: &AnalysisReport) -> Self {
        Self {
            character_count: report.character_count,
            word_count: report.word_count,
            unique_characters: report.unique_characters,
            unique_words: report.unique_words,
            alphabetic_count: report.alphabetic_count,
            digit_count: report.digit_count,
            punctuation_count: report.punctuation_count,
            vowel_count: report.vowel_count,
            words_starting_with_vowel: report.words_starting_with_vowel,
            longest_word: report.longest_word.clone(),
            shortest_word: report.shortest_word.clone(),
            average_word_length: round1(report.average_word_length()),
            vowel_percentage: round1(report.vowel_percentage()),
            letter_percentage: round1(report.letter_percentage()),
            digit_percentage: round1(report.digit_percentage()),
            space_percentage: round1(report.space_percentage()),
            all_lowercase: report.all_lowercase,
            has_long_word: report.has_long_word,
            most_common_word: report
                .most_common_word
                .as_ref()
                .map(|(word, count)| WordCount {
                    word: word.clone(),
                    count: *count,
                }),
            palindromes: report.palindromes.clone(),
            word_frequency: report.word_frequency.clone(),
            word_length_distribution: report.word_length_distribution.clone(),
            letter_frequency: report.letter_frequency.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub timestamp: String,
    pub analysis: ExportedAnalysis,
}

impl ReportDocument {
    #[inline]
    #[must_use]
    pub fn new(report: &AnalysisReport, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp: timestamp.to_rfc3339(),
            analysis: report.into(),
        }
    }
}

/// Everything from one decode: ciphertext, plaintext, shift and statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDocument {
    pub export_time: String,
    pub encrypted: String,
    pub decrypted: String,
    pub shift: Shift,
    pub analysis: ExportedAnalysis,
}

impl SessionDocument {
    #[inline]
    #[must_use]
    pub fn new(
        encrypted: &str,
        decrypted: &str,
        shift: Shift,
        report: &AnalysisReport,
        export_time: DateTime<Local>,
    ) -> Self {
        Self {
            export_time: export_time.to_rfc3339(),
            encrypted: encrypted.to_owned(),
            decrypted: decrypted.to_owned(),
            shift,
            analysis: report.into(),
        }
    }
}

/// Serializes `value` in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[inline]
pub fn render<T: Serialize>(value: &T, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize as JSON")
        }
        ExportFormat::Yaml => {
            serde_yaml_ng::to_string(value).context("Failed to serialize as YAML")
        }
    }
}
