// src/utils.rs
use std::fmt;

use crate::models::{AnalysisReport, BruteForceResult};

const BAR: char = '█';
const RULE_WIDTH: usize = 50;

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Replaces characters that are not allowed in file names and trims leading
/// and trailing spaces and dots. An empty result becomes `unnamed`.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    let replaced: String = filename
        .chars()
        .map(|c| if "<>:\"/\\|?*".contains(c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim_matches(|c| c == ' ' || c == '.');
    if trimmed.is_empty() {
        String::from("unnamed")
    } else {
        trimmed.to_owned()
    }
}

/// Appends `ext` (with or without the leading dot) unless already present.
#[must_use]
pub fn ensure_file_extension(filename: &str, ext: &str) -> String {
    let ext = if ext.starts_with('.') {
        ext.to_owned()
    } else {
        format!(".{ext}")
    };
    if filename.ends_with(&ext) {
        filename.to_owned()
    } else {
        format!("{filename}{ext}")
    }
}

/// Bar length for `value` when `max` fills `width` cells. Non-zero values
/// always get at least one cell.
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_possible_truncation, reason = "Result is clamped to width")]
#[expect(clippy::cast_sign_loss, reason = "Values are never negative")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if value <= 0.0 || max <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    cells.clamp(1, width.max(1))
}

fn bar(cells: usize) -> String {
    std::iter::repeat_n(BAR, cells).collect()
}

/// Horizontal bar chart with one `label | bars (value)` line per row.
#[derive(Debug, Clone, Copy)]
pub struct BarChart<'a> {
    title: &'a str,
    rows: &'a [(String, f64)],
    width: usize,
}

impl<'a> BarChart<'a> {
    #[inline]
    #[must_use]
    pub const fn new(title: &'a str, rows: &'a [(String, f64)], width: usize) -> Self {
        Self { title, rows, width }
    }
}

impl fmt::Display for BarChart<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        if self.rows.is_empty() {
            return writeln!(f, "  (no data)");
        }

        let max = self.rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let label_width = self
            .rows
            .iter()
            .map(|(l, _)| l.chars().count())
            .max()
            .unwrap_or(0);

        for (label, value) in self.rows {
            let bar = bar(bar_len(*value, max, self.width));
            writeln!(f, "  {label:>label_width$} | {bar} ({value})")?;
        }
        Ok(())
    }
}

#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn count_row(label: impl Into<String>, count: usize) -> (String, f64) {
    (label.into(), count as f64)
}

/// Chart rows for the word-length histogram.
#[must_use]
pub fn word_length_rows(report: &AnalysisReport) -> Vec<(String, f64)> {
    report
        .word_length_distribution
        .iter()
        .map(|(length, count)| count_row(format!("{length} chars"), *count))
        .collect()
}

/// Chart rows for the `n` most frequent words.
#[must_use]
pub fn word_frequency_rows(report: &AnalysisReport, n: usize) -> Vec<(String, f64)> {
    report
        .top_words(n)
        .into_iter()
        .map(|(word, count)| count_row(word, count))
        .collect()
}

/// Chart rows for letters, digits, spaces and punctuation.
#[must_use]
pub fn character_type_rows(report: &AnalysisReport) -> Vec<(String, f64)> {
    vec![
        count_row("Letters", report.alphabetic_count),
        count_row("Digits", report.digit_count),
        count_row("Spaces", report.space_count),
        count_row("Punctuation", report.punctuation_count),
    ]
}

/// Per-shift score chart with the chosen shift marked.
#[derive(Debug, Clone, Copy)]
pub struct ShiftScoreChart<'a> {
    result: &'a BruteForceResult,
    width: usize,
}

impl<'a> ShiftScoreChart<'a> {
    #[inline]
    #[must_use]
    pub const fn new(result: &'a BruteForceResult, width: usize) -> Self {
        Self { result, width }
    }
}

impl fmt::Display for ShiftScoreChart<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let best = self.result.best_shift().value();
        let scores = self.result.scores();
        let max = scores.iter().map(|(_, s)| *s).fold(0.0_f64, f64::max);

        writeln!(f, "SHIFT SCORES:")?;
        for (shift, score) in scores {
            let bar = bar(bar_len(score, max, self.width));
            let marker = if shift == best { " <- best" } else { "" };
            writeln!(f, "  {shift:2} | {bar} ({score:.2}){marker}")?;
        }
        Ok(())
    }
}

#[must_use]
pub fn format_shift_scores(result: &BruteForceResult, width: usize) -> String {
    ShiftScoreChart::new(result, width).to_string()
}

/// Plain-text report with sections for counts, character types, word
/// details and the word-length distribution.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisText<'a>(pub &'a AnalysisReport);

impl fmt::Display for AnalysisText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}\nTEXT ANALYSIS REPORT\n{rule}\n")?;

        writeln!(f, "BASIC STATS:")?;
        writeln!(f, "  Words: {}", report.word_count)?;
        writeln!(f, "  Characters: {}", report.character_count)?;
        writeln!(f, "  Unique chars: {}", report.unique_characters)?;
        writeln!(f, "  Unique words: {}\n", report.unique_words)?;

        writeln!(f, "CHARACTER TYPES:")?;
        writeln!(
            f,
            "  Letters: {} ({:.1}%)",
            report.alphabetic_count,
            report.letter_percentage()
        )?;
        writeln!(f, "  Digits: {}", report.digit_count)?;
        writeln!(f, "  Punctuation: {}", report.punctuation_count)?;
        writeln!(f, "  Vowels: {:.1}%\n", report.vowel_percentage())?;

        writeln!(f, "WORD INFO:")?;
        let extremes = [
            ("Longest", &report.longest_word),
            ("Shortest", &report.shortest_word),
        ];
        for (label, word) in extremes {
            match word {
                Some(word) => writeln!(f, "  {label}: '{word}' ({} chars)", word.chars().count())?,
                None => writeln!(f, "  {label}: -")?,
            }
        }
        writeln!(f, "  Average length: {:.1}", report.average_word_length())?;
        writeln!(f, "  All lowercase: {}", report.all_lowercase)?;
        writeln!(f, "  Has long words (>7): {}", report.has_long_word)?;
        writeln!(f, "  Start with vowel: {}", report.words_starting_with_vowel)?;
        if let Some((word, count)) = &report.most_common_word {
            writeln!(f, "  Most common: '{word}' ({count}x)")?;
        }
        if !report.palindromes.is_empty() {
            writeln!(f, "  Palindromes: {}", report.palindromes.join(", "))?;
        }

        writeln!(f, "\nLENGTH DISTRIBUTION:")?;
        for (length, count) in &report.word_length_distribution {
            writeln!(f, "  {length:2} chars: {} ({count})", bar(*count))?;
        }

        writeln!(f, "\n{rule}")
    }
}

#[must_use]
pub fn format_analysis_report(report: &AnalysisReport) -> String {
    AnalysisText(report).to_string()
}
