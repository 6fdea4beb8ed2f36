use anyhow::Result;
use smd::cli::{
    AnalyzeArgs, DecryptArgs, EncryptArgs, InputArgs, ListArgs, OutputFormat, SampleArgs,
};
use smd::{Args, Commands};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join(".smd.toml"), "[log]\nfile = false\n")?;
    Ok(dir)
}

fn args(dir: &Path, command: Commands) -> Args {
    Args {
        config: Some(dir.join(".smd.toml")),
        data_dir: Some(dir.join("data")),
        log_level: Some(String::from("warn")),
        command,
    }
}

fn text(value: &str) -> InputArgs {
    InputArgs {
        text: Some(String::from(value)),
        input: None,
    }
}

fn files_with_prefix(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(prefix))
        {
            files.push(path);
        }
    }
    Ok(files)
}

#[test]
fn test_sample_then_decrypt() -> Result<()> {
    let dir = setup_test_directory()?;

    smd::run(args(dir.path(), Commands::Sample(SampleArgs { shift: 13 })))?;
    assert!(dir.path().join("data/encrypted_message.txt").is_file());

    smd::run(args(
        dir.path(),
        Commands::Decrypt(DecryptArgs {
            all: true,
            save: true,
            export_session: true,
            ..DecryptArgs::default()
        }),
    ))?;

    let decrypted = files_with_prefix(&dir.path().join("data/decrypted"), "decrypted_shift13_")?;
    assert_eq!(decrypted.len(), 1);
    assert_eq!(files_with_prefix(&dir.path().join("data"), "session_")?.len(), 1);
    Ok(())
}

#[test]
fn test_encrypt_to_file() -> Result<()> {
    let dir = setup_test_directory()?;
    let output = dir.path().join("cipher.txt");

    smd::run(args(
        dir.path(),
        Commands::Encrypt(EncryptArgs {
            source: text("Hello, World!"),
            shift: 29,
            output: Some(output.clone()),
        }),
    ))?;

    assert_eq!(fs::read_to_string(output)?, "Khoor, Zruog!");
    Ok(())
}

#[test]
fn test_analyze_with_save() -> Result<()> {
    let dir = setup_test_directory()?;

    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
        smd::run(args(
            dir.path(),
            Commands::Analyze(AnalyzeArgs {
                source: text("the the a"),
                format,
                save: format == OutputFormat::Yaml,
                charts: true,
                top: 5,
            }),
        ))?;
    }

    let saved = files_with_prefix(&dir.path().join("data"), "analysis_")?;
    assert_eq!(saved.len(), 1);
    let content = fs::read_to_string(&saved[0])?;
    assert!(content.contains("average_word_length: 2.3"));
    Ok(())
}

#[test]
fn test_decrypt_missing_input_fails() -> Result<()> {
    let dir = setup_test_directory()?;

    let result = smd::run(args(
        dir.path(),
        Commands::Decrypt(DecryptArgs {
            source: InputArgs {
                text: None,
                input: Some(dir.path().join("missing.txt")),
            },
            ..DecryptArgs::default()
        }),
    ));
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_list_and_bad_pattern() -> Result<()> {
    let dir = setup_test_directory()?;

    smd::run(args(
        dir.path(),
        Commands::List(ListArgs {
            pattern: String::from("*.txt"),
        }),
    ))?;

    let result = smd::run(args(
        dir.path(),
        Commands::List(ListArgs {
            pattern: String::from("[unclosed"),
        }),
    ));
    assert!(result.is_err());
    Ok(())
}
