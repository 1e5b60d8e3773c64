//! File-backed `tracing` setup.
//!
//! The TUI owns the terminal, so log output always goes to a file. The
//! filter is read from `AUTOCOMPLETER_LOG` (e.g. `debug`,
//! `autocompleter::completer=trace`) and defaults to `warn`.
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "AUTOCOMPLETER_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";
const LOG_DIR: &str = "autocompleter";
const LOG_FILE: &str = "autocompleter.log";

pub fn init(log_file: Option<&Path>) -> Result<()> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => default_log_path(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create directory {}", parent.display())
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install logger: {err}"))
}

fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join(LOG_DIR)
        .join(LOG_FILE)
}
