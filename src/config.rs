// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for fzgrep
//!
//! Loads configuration from .fzgreprc.toml in current directory or ~/.config/fzgrep/config.toml

use serde::Deserialize;
use std::path::PathBuf;

/// Score a line must exceed to be reported, unless overridden.
pub const DEFAULT_MIN_SCORE: u8 = 50;

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration loaded from .fzgreprc.toml or ~/.config/fzgrep/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory to search when the CLI does not name one
    pub path: Option<PathBuf>,
    /// Minimum similarity score a line must exceed (0-100)
    pub min_score: Option<u8>,
    /// Default output format (text or json)
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .fzgreprc.toml in current directory
    /// 2. ~/.config/fzgrep/config.toml
    pub fn load() -> Self {
        // Try current directory first
        if let Some(config) = Self::load_from_path(&PathBuf::from(".fzgreprc.toml")) {
            return config;
        }

        // Try home directory config
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("fzgrep").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from_path(path: &PathBuf) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format
            .as_ref()
            .and_then(|s| match s.to_lowercase().as_str() {
                "json" => Some(ConfigOutputFormat::Json),
                "text" => Some(ConfigOutputFormat::Text),
                _ => None,
            })
    }

    /// Merge CLI path with config (CLI wins; falls back to current directory)
    pub fn merge_path(&self, cli_value: Option<PathBuf>) -> PathBuf {
        cli_value
            .or_else(|| self.path.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Merge CLI threshold with config (CLI wins)
    pub fn merge_min_score(&self, cli_value: Option<u8>) -> u8 {
        cli_value.or(self.min_score).unwrap_or(DEFAULT_MIN_SCORE)
    }
}
