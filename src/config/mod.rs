//! Configuration management module.
//!
//! Handles loading and saving application configuration from a JSON file
//! stored next to the executable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that switches on the development configuration.
pub const ENV_VAR: &str = "TXTPAD_ENV";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_width")]
    pub window_width: f32,
    #[serde(default = "default_height")]
    pub window_height: f32,
    /// Open the egui inspection window at startup.
    #[serde(default)]
    pub dev_mode: bool,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// `tracing` filter used when `TXTPAD_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_width() -> f32 {
    900.0
}

fn default_height() -> f32 {
    700.0
}

fn default_recent_limit() -> usize {
    10
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: default_width(),
            window_height: default_height(),
            dev_mode: false,
            recent_limit: default_recent_limit(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Apply `TXTPAD_ENV=development`.
    pub fn with_env_override(mut self, env_value: Option<&str>) -> Self {
        if env_value.is_some_and(|v| v.eq_ignore_ascii_case("development")) {
            self.dev_mode = true;
        }
        self
    }
}

/// Configuration manager for loading/saving config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::in_directory(&Self::get_exe_directory())
    }

    /// Manager whose files live in `dir`.
    pub fn in_directory(dir: &Path) -> Self {
        Self {
            config_path: dir.join("txtpad_config.json"),
        }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn get_config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Sibling file holding the recent documents list.
    pub fn recent_documents_path(&self) -> PathBuf {
        self.config_path.with_file_name("txtpad_recent.json")
    }

    /// Load configuration from file, falling back to defaults.
    pub fn load(&self) -> Config {
        let mut config = self.try_load().unwrap_or_default();

        if config.window_width <= 0.0 || config.window_height <= 0.0 {
            config.window_width = default_width();
            config.window_height = default_height();
        }
        if config.recent_limit == 0 {
            config.recent_limit = default_recent_limit();
        }
        if config.log_filter.trim().is_empty() {
            config.log_filter = default_log_filter();
        }

        config
    }

    fn try_load(&self) -> Option<Config> {
        if !self.config_path.exists() {
            return None;
        }

        let content = fs::read_to_string(&self.config_path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Save configuration to file.
    pub fn save(&self, config: &Config) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;
        fs::write(&self.config_path, json)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
