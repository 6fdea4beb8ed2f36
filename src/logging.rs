// src/logging.rs
use anyhow::{Context as _, Result};
use log::LevelFilter;
use std::path::Path;

pub const LOG_FILE_NAME: &str = "operations.log";

/// Routes `log` records to stderr and, when `log_dir` is given, appends them
/// to `operations.log` inside it.
///
/// Only the first call installs a logger; later calls (as in tests that run
/// the CLI several times in one process) leave the existing one in place.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
#[inline]
pub fn init_logging(level: LevelFilter, log_dir: Option<&Path>) -> Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(dir) = log_dir {
        let path = dir.join(LOG_FILE_NAME);
        let file = fern::log_file(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    if dispatch.apply().is_err() {
        log::debug!("Logger already initialized");
    }
    Ok(())
}
