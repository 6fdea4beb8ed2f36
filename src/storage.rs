// src/storage.rs
use anyhow::{Context as _, Result, bail};
use chrono::Local;
use glob::Pattern;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::cipher::encode;
use crate::export::{ExportFormat, ReportDocument, SessionDocument, render};
use crate::models::{AnalysisReport, Shift};
use crate::utils::{ensure_file_extension, is_hidden, sanitize_filename};

pub const DECRYPTED_DIR_NAME: &str = "decrypted";
pub const ENCRYPTED_FILE_NAME: &str = "encrypted_message.txt";
pub const DEFAULT_LIST_PATTERN: &str = "*.txt";

/// Sample plaintext for [`Store::create_sample`].
pub const SAMPLE_MESSAGE: &str = "This is a secret message from the spy. \
The mission is extremely important
and must be completed before midnight. Meet me at the old warehouse near the docks.
Bring the documents and make sure you are not followed. The password is 'Blue Moon'.
Trust no one except Agent Seven. Good luck!";

pub const SAMPLE_SHIFT: i64 = 13;

const FILE_STAMP: &str = "%Y%m%d_%H%M%S";
const HEADER_STAMP: &str = "%Y-%m-%d %H:%M:%S";
const HEADER_RULE: &str = "================";

/// Flat-file storage rooted at a data directory:
///
/// ```text
/// <data_dir>/encrypted_message.txt
/// <data_dir>/analysis_*.json
/// <data_dir>/session_*.json
/// <data_dir>/decrypted/*.txt
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
    decrypted_dir: PathBuf,
}

impl Store {
    /// Opens the store, creating `data_dir` and its `decrypted` subdirectory.
    ///
    /// # Errors
    ///
    /// Returns an error if either directory cannot be created.
    #[inline]
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let decrypted_dir = data_dir.join(DECRYPTED_DIR_NAME);
        fs::create_dir_all(&decrypted_dir).with_context(|| {
            format!("Failed to create data directory: {}", decrypted_dir.display())
        })?;
        Ok(Self {
            data_dir,
            decrypted_dir,
        })
    }

    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[inline]
    #[must_use]
    pub fn decrypted_dir(&self) -> &Path {
        &self.decrypted_dir
    }

    #[inline]
    #[must_use]
    pub fn encrypted_file(&self) -> PathBuf {
        self.data_dir.join(ENCRYPTED_FILE_NAME)
    }

    /// Reads a message, defaulting to `encrypted_message.txt`. Surrounding
    /// whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file does not exist or cannot be read as UTF-8
    /// * The file is empty after trimming
    #[inline]
    pub fn read_message(&self, path: Option<&Path>) -> Result<String> {
        let path = path.map_or_else(|| self.encrypted_file(), Path::to_path_buf);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read message file: {}", path.display()))
            .inspect_err(|e| error!("{e:#}"))?;

        let content = content.trim();
        if content.is_empty() {
            error!("File is empty: {}", path.display());
            bail!("File is empty: {}", path.display());
        }

        info!("Read from {}", path.display());
        Ok(content.to_owned())
    }

    /// Saves a decrypted message under `decrypted/` with a small header.
    /// Without a name, one is generated from the shift and current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    #[inline]
    pub fn save_decrypted(
        &self,
        text: &str,
        shift: Shift,
        filename: Option<&str>,
    ) -> Result<PathBuf> {
        let now = Local::now();
        let filename = filename.map_or_else(
            || format!("decrypted_shift{shift}_{}.txt", now.format(FILE_STAMP)),
            |name| ensure_file_extension(&sanitize_filename(name), "txt"),
        );
        let path = self.decrypted_dir.join(filename);

        let content = format!(
            "DECRYPTED MESSAGE\n{HEADER_RULE}\nShift Used: {shift}\n\
             Date: {}\n{HEADER_RULE}\n\n{text}",
            now.format(HEADER_STAMP)
        );
        write_file(&path, &content)?;

        info!("Saved to {}", path.display());
        Ok(path)
    }

    /// Saves an analysis report document in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    #[inline]
    pub fn save_analysis(
        &self,
        report: &AnalysisReport,
        format: ExportFormat,
        filename: Option<&str>,
    ) -> Result<PathBuf> {
        let now = Local::now();
        let filename = filename.map_or_else(
            || format!("analysis_{}.{}", now.format(FILE_STAMP), format.extension()),
            |name| ensure_file_extension(&sanitize_filename(name), format.extension()),
        );
        let path = self.data_dir.join(filename);

        let document = render(&ReportDocument::new(report, now), format)?;
        write_file(&path, &document)?;

        info!("Analysis saved to {}", path.display());
        Ok(path)
    }

    /// Writes ciphertext, plaintext, shift and analysis to one JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    #[inline]
    pub fn export_session(
        &self,
        encrypted: &str,
        decrypted: &str,
        shift: Shift,
        report: &AnalysisReport,
    ) -> Result<PathBuf> {
        let now = Local::now();
        let path = self
            .data_dir
            .join(format!("session_{}.json", now.format(FILE_STAMP)));

        let document = SessionDocument::new(encrypted, decrypted, shift, report, now);
        write_file(&path, &render(&document, ExportFormat::Json)?)?;

        info!("Session exported to {}", path.display());
        Ok(path)
    }

    /// Saved decrypted messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the decrypted directory cannot be read.
    #[inline]
    pub fn list_decrypted(&self) -> Result<Vec<PathBuf>> {
        self.list_decrypted_matching(DEFAULT_LIST_PATTERN)
    }

    /// Saved files whose names match a glob `pattern`, sorted by name
    /// descending. Generated names embed a timestamp, so this is newest first.
    /// Hidden files are skipped.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The pattern is not valid glob syntax
    /// * The decrypted directory cannot be read
    #[inline]
    pub fn list_decrypted_matching(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let pattern =
            Pattern::new(pattern).with_context(|| format!("Invalid pattern: {pattern}"))?;
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.decrypted_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry.inspect_err(|e| error!("List failed: {e}"))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_str().is_some_and(|name| pattern.matches(name)) {
                files.push(entry.into_path());
            }
        }

        files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        Ok(files)
    }

    /// Encrypts `text` and writes it to `encrypted_message.txt`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    #[inline]
    pub fn create_sample(&self, text: &str, shift: i64) -> Result<PathBuf> {
        let path = self.encrypted_file();
        write_file(&path, &encode(text, shift))?;

        info!("Sample file with shift {} at {}", Shift::new(shift), path.display());
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
        .inspect_err(|e| error!("{e:#}"))
}
