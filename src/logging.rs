//! Process-wide log sink
//!
//! The terminal is the editing surface, so records go to a file through a
//! non-blocking writer. The returned guard flushes on drop and must be held
//! until the editor exits.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{default_config_dir, LogConfig};

/// Environment variable overriding the configured filter
pub const LOG_ENV: &str = "MINED_LOG";

/// Resolve the log file: explicit override, then config, then the config dir.
pub fn log_path(config: &LogConfig, override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .unwrap_or_else(|| default_config_dir().join("mined.log"))
}

fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to [`log_path`].
pub fn init(config: &LogConfig, override_path: Option<&Path>) -> Result<WorkerGuard> {
    let path = log_path(config, override_path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(guard)
}
