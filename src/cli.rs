// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::analyzer::analyze;
use crate::core::cipher::{brute_force, decode, encode};
use crate::core::config::{Config, load_config, load_config_file};
use crate::export::{ExportFormat, ExportedAnalysis, render};
use crate::logging::init_logging;
use crate::models::{AnalysisReport, Shift};
use crate::storage::{DEFAULT_LIST_PATTERN, SAMPLE_MESSAGE, SAMPLE_SHIFT, Store};
use crate::utils::{
    BarChart, character_type_rows, format_analysis_report, format_shift_scores,
    word_frequency_rows, word_length_rows,
};

const CHART_WIDTH: usize = 40;
const PREVIEW_CHARS: usize = 50;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the nearest .smd.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for saved messages, reports and the operations log
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Logging level. One of: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text with a known shift
    Encrypt(EncryptArgs),

    /// Decrypt text, brute-forcing the shift unless one is given
    Decrypt(DecryptArgs),

    /// Show statistics about a text
    Analyze(AnalyzeArgs),

    /// Write the sample encrypted message to the data directory
    Sample(SampleArgs),

    /// List saved decrypted messages, newest first
    List(ListArgs),
}

/// Where the text comes from. Falls back to the data directory's
/// encrypted_message.txt when neither is given.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Text to process
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from this file
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Shift to apply; any integer, reduced modulo 26
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: i64,

    /// Write the ciphertext to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Default)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Known shift; skips the brute-force search
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: Option<i64>,

    /// Show the score of every shift and the plausible candidates
    #[arg(short, long, conflicts_with = "shift")]
    pub all: bool,

    /// Save the plaintext under <data-dir>/decrypted
    #[arg(long)]
    pub save: bool,

    /// Export ciphertext, plaintext, shift and analysis as JSON
    #[arg(long)]
    pub export_session: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// File format used when saving; plain text reports are saved as JSON.
    #[inline]
    #[must_use]
    pub const fn export_format(self) -> ExportFormat {
        match self {
            Self::Text | Self::Json => ExportFormat::Json,
            Self::Yaml => ExportFormat::Yaml,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Save the report in the data directory
    #[arg(long)]
    pub save: bool,

    /// Draw word-length and word-frequency bar charts
    #[arg(short, long)]
    pub charts: bool,

    /// Number of words in the frequency chart
    #[arg(short = 't', long, default_value = "10")]
    pub top: usize,
}

#[derive(clap::Args, Debug)]
pub struct SampleArgs {
    /// Shift used to encrypt the sample
    #[arg(short, long, default_value_t = SAMPLE_SHIFT, allow_negative_numbers = true)]
    pub shift: i64,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Glob pattern file names must match
    #[arg(short, long, default_value = DEFAULT_LIST_PATTERN)]
    pub pattern: String,
}

/// Loads config, applies command line overrides, opens the store and starts
/// logging. Command line flags win over the config file.
fn setup(args: &Args) -> Result<(Config, Store)> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => load_config(&env::current_dir()?)?,
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(level) = &args.log_level {
        config.log.level = Some(level.clone());
    }

    let store = Store::new(config.data_dir())?;
    let log_dir = config.log.file().then(|| store.data_dir());
    init_logging(config.log.level_filter()?, log_dir)?;
    debug!("Data directory: {}", store.data_dir().display());

    Ok((config, store))
}

fn resolve_input(source: &InputArgs, store: &Store) -> Result<String> {
    match (&source.text, &source.input) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => store.read_message(Some(path)),
        (None, None) => store.read_message(None),
    }
}

fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview.replace('\n', " ")
}

fn encrypt(args: &EncryptArgs, store: &Store) -> Result<()> {
    let plaintext = resolve_input(&args.source, store)?;
    let ciphertext = encode(&plaintext, args.shift);

    match &args.output {
        Some(path) => {
            fs::write(path, &ciphertext)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            println!("Encrypted with shift {} to {}", Shift::new(args.shift), path.display());
        }
        None => println!("{ciphertext}"),
    }
    Ok(())
}

fn decrypt(args: &DecryptArgs, config: &Config, store: &Store) -> Result<()> {
    let ciphertext = resolve_input(&args.source, store)?;

    let (shift, plaintext) = if let Some(shift) = args.shift {
        (Shift::new(shift), decode(&ciphertext, shift))
    } else {
        let word_list = config.word_list();
        let result = brute_force(&ciphertext, &word_list);

        if result.best.score <= 0.0 {
            warn!("No shift produced recognizable words; falling back to shift 0");
        }
        if args.all {
            println!("{}", format_shift_scores(&result, CHART_WIDTH));
            println!("PLAUSIBLE CANDIDATES:");
            for candidate in result
                .ranked()
                .into_iter()
                .filter(|c| word_list.looks_like_english(&c.text, config.min_matches()))
            {
                println!(
                    "  Shift {:2}: {} (matches: {}, score: {:.2})",
                    candidate.shift,
                    preview(&candidate.text),
                    word_list.count_matches(&candidate.text),
                    candidate.score
                );
            }
            println!();
        }
        (result.best_shift(), result.best_text().to_owned())
    };

    println!("Shift: {shift}");
    println!("{plaintext}");

    if args.save {
        let path = store.save_decrypted(&plaintext, shift, None)?;
        println!("Saved to {}", path.display());
    }
    if args.export_session {
        let report = analyze(&plaintext);
        let path = store.export_session(&ciphertext, &plaintext, shift, &report)?;
        println!("Session exported to {}", path.display());
    }
    Ok(())
}

/// Character-type, word-length and top-word charts, each preceded by a blank line.
fn charts(report: &AnalysisReport, top: usize) -> String {
    let sections = [
        ("CHARACTER TYPES", character_type_rows(report)),
        ("WORD LENGTHS", word_length_rows(report)),
        ("TOP WORDS", word_frequency_rows(report, top)),
    ];
    sections
        .iter()
        .map(|(title, rows)| format!("\n{}", BarChart::new(title, rows, CHART_WIDTH)))
        .collect()
}

fn analyze_text(args: &AnalyzeArgs, store: &Store) -> Result<()> {
    let text = resolve_input(&args.source, store)?;
    let report = analyze(&text);

    match args.format {
        OutputFormat::Text => print!("{}", format_analysis_report(&report)),
        OutputFormat::Json | OutputFormat::Yaml => {
            let exported = ExportedAnalysis::from(&report);
            println!("{}", render(&exported, args.format.export_format())?);
        }
    }

    if args.charts {
        print!("{}", charts(&report, args.top));
    }

    if args.save {
        let path = store.save_analysis(&report, args.format.export_format(), None)?;
        println!("Analysis saved to {}", path.display());
    }
    Ok(())
}

fn list(args: &ListArgs, store: &Store) -> Result<()> {
    let files = store.list_decrypted_matching(&args.pattern)?;
    if files.is_empty() {
        println!("No decrypted files found in {}", store.decrypted_dir().display());
    }
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}

/// Runs one command.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed, or names an invalid log level
/// * The data directory cannot be created
/// * An input file is missing, unreadable or empty
/// * An output file cannot be written
#[inline]
pub fn run(args: Args) -> Result<()> {
    let (config, store) = setup(&args)?;

    match &args.command {
        Commands::Encrypt(encrypt_args) => encrypt(encrypt_args, &store),
        Commands::Decrypt(decrypt_args) => decrypt(decrypt_args, &config, &store),
        Commands::Analyze(analyze_args) => analyze_text(analyze_args, &store),
        Commands::Sample(sample_args) => {
            let path = store.create_sample(SAMPLE_MESSAGE, sample_args.shift)?;
            println!("Created sample: {}", path.display());
            Ok(())
        }
        Commands::List(list_args) => list(list_args, &store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates() {
        let long = "a".repeat(60);
        assert_eq!(preview(&long), format!("{}...", "a".repeat(50)));
        assert_eq!(preview("short\ntext"), "short text");
    }

    #[test]
    fn test_parse_decrypt_args() {
        let args = Args::parse_from(["smd", "--data-dir", "vault", "decrypt", "Uryyb", "--all"]);
        assert_eq!(args.data_dir, Some(PathBuf::from("vault")));
        match args.command {
            Commands::Decrypt(decrypt) => {
                assert_eq!(decrypt.source.text.as_deref(), Some("Uryyb"));
                assert!(decrypt.all);
                assert_eq!(decrypt.shift, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_shift() {
        let args = Args::parse_from(["smd", "encrypt", "abc", "--shift", "-1"]);
        match args.command {
            Commands::Encrypt(encrypt) => assert_eq!(encrypt.shift, -1),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_text_and_input_conflict() {
        let parsed = Args::try_parse_from(["smd", "analyze", "words", "--input", "file.txt"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_all_conflicts_with_known_shift() {
        let parsed = Args::try_parse_from(["smd", "decrypt", "Uryyb", "--shift", "13", "--all"]);
        assert!(parsed.is_err());

        let parsed = Args::try_parse_from(["smd", "decrypt", "Uryyb", "--all"]);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_charts_include_character_types() {
        let report = analyze("the the a 42!");
        let output = charts(&report, 1);

        let titles: Vec<&str> = output.lines().filter(|l| l.ends_with(':')).collect();
        assert_eq!(titles, vec!["CHARACTER TYPES:", "WORD LENGTHS:", "TOP WORDS:"]);
        assert!(output.contains("Digits |"));
        assert!(output.contains("the | "));
        assert!(!output.contains("  a | "));
    }

    #[test]
    fn test_output_format_export() {
        assert_eq!(OutputFormat::Text.export_format(), ExportFormat::Json);
        assert_eq!(OutputFormat::Yaml.export_format(), ExportFormat::Yaml);
    }
}
