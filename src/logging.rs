//! Log setup.
//!
//! The terminal belongs to the UI, so logs go to a file. The filter comes
//! from configuration (`PAINEL_LOG`), falling back to `info` when it does
//! not parse.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "info";

/// Build the filter, falling back when `directive` is invalid.
pub fn filter_from(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Open (creating parent directories) the log file in append mode.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// A subscriber that is already installed is left in place.
pub fn init(directive: &str, path: &Path) -> std::io::Result<()> {
    let file = open_log_file(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(directive))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "painel starting");
    Ok(())
}
