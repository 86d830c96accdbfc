use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::PuzzleOptions;

/// Name of the config file looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "calcrostic.toml";

/// Configuration loaded from calcrostic.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    /// Default puzzle options sent with every request
    #[serde(default)]
    pub puzzle: PuzzleOptions,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Puzzle service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the puzzle service
    #[serde(default = "default_service_url")]
    pub url: String,
    /// Timeout in seconds for requests (0 disables the timeout)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_service_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Placeholder text shown for empty fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_puzzle_placeholder")]
    pub puzzle_placeholder: String,
    #[serde(default = "default_solution_placeholder")]
    pub solution_placeholder: String,
    #[serde(default = "default_mapping_placeholder")]
    pub mapping_placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            puzzle_placeholder: default_puzzle_placeholder(),
            solution_placeholder: default_solution_placeholder(),
            mapping_placeholder: default_mapping_placeholder(),
        }
    }
}

fn default_puzzle_placeholder() -> String {
    "(no puzzle section found)".to_string()
}

fn default_solution_placeholder() -> String {
    "(no solution section found)".to_string()
}

fn default_mapping_placeholder() -> String {
    "(no mapping found)".to_string()
}

/// Values given on the command line, applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub timeout: Option<u64>,
    pub allow_zero: Option<bool>,
    pub allow_two_digit: Option<bool>,
    pub allow_division: Option<bool>,
    pub letters_min: Option<u32>,
    pub letters_max: Option<u32>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from calcrostic.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(u) = overrides.url {
            self.service.url = u;
        }
        if let Some(t) = overrides.timeout {
            self.service.timeout_seconds = t;
        }
        if let Some(v) = overrides.allow_zero {
            self.puzzle.allow_zero = v;
        }
        if let Some(v) = overrides.allow_two_digit {
            self.puzzle.allow_two_digit = v;
        }
        if let Some(v) = overrides.allow_division {
            self.puzzle.allow_division = v;
        }
        if let Some(v) = overrides.letters_min {
            self.puzzle.letters_min = v;
        }
        if let Some(v) = overrides.letters_max {
            self.puzzle.letters_max = v;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}
