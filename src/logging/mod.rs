//! Diagnostic tracing and tape logging to disk.
//!
//! Tracing output goes to a file because the terminal belongs to the UI.
//! When tape logging is enabled, every evaluation is appended to a daily file
//! named `tape_<date>.log` in the configured log directory (default:
//! `~/.local/share/calcpad/tapes/`).

use crate::app::state::TapeEntry;
use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber writing to `config.trace_file`.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let path = expand_home(&config.trace_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open trace file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.trace_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(())
}

/// Appends tape entries to daily log files.
///
/// File handles are cached for the lifetime of the logger. A file that cannot
/// be opened is remembered as unavailable and its entries are dropped.
pub struct TapeLogger {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, Option<fs::File>>,
}

impl TapeLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: expand_home(&config.log_dir),
            file_handles: HashMap::new(),
        }
    }

    /// Write an entry to today's tape file. No-op if logging is disabled.
    pub fn log_entry(&mut self, entry: &TapeEntry) {
        if !self.enabled {
            return;
        }

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("tape_{}.log", date);
        let log_dir = &self.log_dir;

        let handle = self.file_handles.entry(filename.clone()).or_insert_with(|| {
            let _ = fs::create_dir_all(log_dir);
            let path = log_dir.join(&filename);
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot open tape file");
                    None
                }
            }
        });

        if let Some(file) = handle {
            let line = format!("[{}] {} = {}", entry.timestamp, entry.expression, entry.result);
            if let Err(e) = writeln!(file, "{}", line) {
                tracing::warn!(error = %e, "failed to write tape entry");
            }
        }
    }
}
