// src/core/config.rs
pub mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config, load_config_file};

use anyhow::{Result, anyhow};
use log::LevelFilter;
use serde::Deserialize;
use std::path::PathBuf;

use crate::core::cipher::WordList;
use crate::core::cipher::scoring::DEFAULT_MIN_MATCHES;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WordsConfig {
    /// Replaces the built-in English list when set.
    pub common: Option<Vec<String>>,
    /// Appended to whichever list is in effect.
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<bool>,
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Whether operations are also appended to the log file in the data dir.
    #[inline]
    #[must_use]
    pub fn file(&self) -> bool {
        self.file.unwrap_or(true)
    }

    /// # Errors
    ///
    /// Returns an error if the configured level is not one of
    /// off, error, warn, info, debug or trace.
    #[inline]
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level()
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("Invalid log level: {}", self.level()))
    }
}

/// Settings read from `.smd.toml`. Every field is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub min_matches: Option<usize>,
    pub words: WordsConfig,
    pub log: LogConfig,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    #[inline]
    #[must_use]
    pub fn min_matches(&self) -> usize {
        self.min_matches.unwrap_or(DEFAULT_MIN_MATCHES)
    }

    /// The reference word list after applying `common` and `extra`.
    #[inline]
    #[must_use]
    pub fn word_list(&self) -> WordList {
        let mut list = self
            .words
            .common
            .as_ref()
            .map_or_else(WordList::default, WordList::new);
        list.extend(&self.words.extra);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert_eq!(config.min_matches(), 3);
        assert_eq!(config.word_list(), WordList::default());
        assert_eq!(config.log.level(), "info");
        assert!(config.log.file());
    }

    #[test]
    fn test_extra_words_extend_default() -> Result<()> {
        let config: Config = toml::from_str("[words]\nextra = [\"spy\", \"agent\"]\n")?;
        let list = config.word_list();
        assert!(list.contains("the"));
        assert!(list.contains("spy"));
        assert_eq!(list.len(), WordList::default().len() + 2);
        Ok(())
    }

    #[test]
    fn test_common_words_replace_default() -> Result<()> {
        let config: Config = toml::from_str("[words]\ncommon = [\"le\", \"la\"]\n")?;
        let list = config.word_list();
        assert!(list.contains("le"));
        assert!(!list.contains("the"));
        Ok(())
    }

    #[test]
    fn test_level_filter() -> Result<()> {
        let config: Config = toml::from_str("[log]\nlevel = \"debug\"\nfile = false\n")?;
        assert_eq!(config.log.level_filter()?, LevelFilter::Debug);
        assert!(!config.log.file());

        let bad = LogConfig {
            level: Some("loud".to_owned()),
            file: None,
        };
        assert!(bad.level_filter().is_err());
        Ok(())
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<Config>("colour = true\n").is_err());
    }
}
