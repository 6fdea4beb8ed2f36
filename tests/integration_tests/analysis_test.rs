// tests/integration_tests/analysis_test.rs
use anyhow::Result;
use pretty_assertions::assert_eq;
use smd::analyze;
use smd::export::{ExportFormat, ExportedAnalysis, render};
use std::collections::BTreeMap;

#[test]
fn test_analyze_decrypted_plaintext() {
    let report = analyze("Meet me at the old warehouse near the docks.");

    assert_eq!(report.word_count, 9);
    assert_eq!(report.unique_words, 8);
    assert_eq!(report.longest_word.as_deref(), Some("warehouse"));
    assert_eq!(report.shortest_word.as_deref(), Some("me"));
    assert_eq!(report.word_frequency.get("the"), Some(&2));
    assert_eq!(report.word_frequency.get("docks"), Some(&1));
    assert!(report.has_long_word);
    assert!(!report.all_lowercase);
}

#[test]
fn test_word_frequency_table() {
    let report = analyze("a a b");
    assert_eq!(
        report.word_frequency,
        BTreeMap::from([("a".to_owned(), 2), ("b".to_owned(), 1)])
    );
}

#[test]
fn test_unique_characters_case_sensitive_words_not() {
    let report = analyze("Word word WORD");
    assert_eq!(report.unique_words, 1);
    assert_eq!(report.unique_characters, 9);
}

#[test]
fn test_yaml_export_rounds_percentages() -> Result<()> {
    let report = analyze("aeiou xyz");
    let yaml = render(&ExportedAnalysis::from(&report), ExportFormat::Yaml)?;

    assert!(yaml.contains("vowel_percentage: 62.5"));
    assert!(yaml.contains("letter_percentage: 88.9"));
    Ok(())
}
