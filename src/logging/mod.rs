//! Diagnostic logging to disk.
//!
//! The terminal is in raw mode while the app runs, so `tracing` output goes to
//! a daily log file instead of stderr. Files are named
//! `healthpredict_<date>.log` and stored in the configured log directory
//! (default: `~/.local/share/healthpredict/logs/`).

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. No-op if logging is disabled or
/// the log file cannot be opened.
///
/// Returns the path of the file being written, if any.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let log_dir = expand_home(&config.log_dir);
    if fs::create_dir_all(&log_dir).is_err() {
        return None;
    }

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let filepath = log_dir.join(log_file_name(&date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filepath)
        .ok()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    installed.then_some(filepath)
}

fn log_file_name(date: &str) -> String {
    format!("healthpredict_{}.log", date)
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    Path::new(dir).to_path_buf()
}
