// tests/integration_tests/storage_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use smd::storage::{SAMPLE_MESSAGE, SAMPLE_SHIFT};
use smd::{Shift, Store, WordList, analyze, brute_force};

#[test]
fn test_decrypt_save_and_list() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let store = Store::new(temp_dir.path().join("data"))?;

    let ciphertext = store.read_message(Some(&temp_dir.path().join("inbox/spy.txt")))?;
    let result = brute_force(&ciphertext, &WordList::default());
    let path = store.save_decrypted(result.best_text(), result.best_shift(), Some("spy"))?;

    assert_eq!(store.list_decrypted()?, vec![path.clone()]);
    let saved = std::fs::read_to_string(path)?;
    assert!(saved.contains("Shift Used: 13"));
    assert!(saved.contains("warehouse"));
    Ok(())
}

#[test]
fn test_unreadable_input_is_rejected() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let store = Store::new(temp_dir.path().join("data"))?;

    assert!(store.read_message(Some(&temp_dir.path().join("inbox/empty.txt"))).is_err());
    assert!(store.read_message(Some(&temp_dir.path().join("inbox/missing.txt"))).is_err());
    assert_eq!(
        store.read_message(Some(&temp_dir.path().join("inbox/plain.txt")))?,
        "the the a"
    );
    Ok(())
}

#[test]
fn test_sample_then_session_export() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let store = Store::new(temp_dir.path().join("data"))?;
    store.create_sample(SAMPLE_MESSAGE, SAMPLE_SHIFT)?;

    let ciphertext = store.read_message(None)?;
    let result = brute_force(&ciphertext, &WordList::default());
    assert_eq!(result.best_shift(), Shift::new(SAMPLE_SHIFT));

    let report = analyze(result.best_text());
    let path = store.export_session(&ciphertext, result.best_text(), result.best_shift(), &report)?;
    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;

    assert_eq!(value["shift"], serde_json::json!(13));
    assert_eq!(value["encrypted"], serde_json::json!(ciphertext));
    assert_eq!(value["analysis"]["word_count"], serde_json::json!(report.word_count));
    Ok(())
}
