// tests/integration_tests/config_test.rs
use super::common::create_config_file;
use anyhow::Result;
use smd::{Shift, brute_force, encode, load_config};
use tempfile::TempDir;

#[test]
fn test_config_word_list_changes_detection() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(
        temp_dir.path(),
        &["[words]", "common = [\"hola\", \"el\", \"la\"]"],
    )?;
    let nested = temp_dir.path().join("notes/2024");
    std::fs::create_dir_all(&nested)?;

    let config = load_config(&nested)?;
    let list = config.word_list();
    assert!(!list.contains("the"));

    let ciphertext = encode("hola el gato y la casa", 9);
    assert_eq!(brute_force(&ciphertext, &list).best_shift(), Shift::new(9));
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(temp_dir.path(), &["min_matches = [1, 2"])?;

    assert!(load_config(temp_dir.path()).is_err());
    Ok(())
}
