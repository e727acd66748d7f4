use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Editor configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// General editor settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Log output settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Editor settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EditorConfig {
    /// Show the line-number gutter
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Idle sleep between input polls, in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Logging settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    /// Filter directive used when `MINED_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; defaults to `mined.log` in the config directory
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// Default values
fn default_show_line_numbers() -> bool {
    true
}
fn default_tick_ms() -> u64 {
    5
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_line_numbers: default_show_line_numbers(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Directory holding `config.json` and the default log file
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mined")
}

/// Configuration manager
pub struct ConfigManager {
    /// The config
    config: Config,

    /// The path to the config file
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for `config.json` inside `config_dir`
    pub fn new(config_dir: &Path) -> Self {
        Self::with_file(config_dir.join("config.json"))
    }

    /// Manager for an explicit config file
    pub fn with_file(config_path: PathBuf) -> Self {
        Self {
            config: Config::default(),
            config_path,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config if the file exists, otherwise keep defaults.
    ///
    /// Returns whether a file was read.
    pub fn load(&mut self) -> Result<bool> {
        if !self.config_path.exists() {
            return Ok(false);
        }

        let config_str = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read {}", self.config_path.display()))?;
        self.config = serde_json::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config: {}", e))?;

        Ok(true)
    }

    /// Save the config, creating its directory if needed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let config_str = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_path, config_str)?;
        Ok(())
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
