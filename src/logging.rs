//! Log file setup
//!
//! Logs go to `<cache dir>/sketchlist/sketchlist.log` so they never draw over
//! the TUI. The filter comes from `SKETCHLIST_LOG` (tracing `EnvFilter`
//! syntax), defaulting to `info`, or `debug` with `--verbose`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::APP_DIR;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SKETCHLIST_LOG";

const LOG_FILE: &str = "sketchlist.log";

/// Default log file location.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Filter used when `SKETCHLIST_LOG` is unset or invalid.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "sketchlist=debug"
    } else {
        "sketchlist=info"
    }
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log file path, or `None` when no cache directory exists.
pub fn init(verbose: bool) -> Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(Some(path))
}
