//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// How states are printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board grid plus a status line.
    #[default]
    #[display("text")]
    Text,
    /// Pretty-printed JSON snapshot.
    #[display("json")]
    Json,
}

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format for rendered states.
    #[serde(default)]
    format: OutputFormat,

    /// Show free cell numbers on the text board.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Prompt printed before reading a move.
    #[serde(default = "default_prompt")]
    prompt: String,
}

fn default_show_hints() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_hints: default_show_hints(),
            prompt: default_prompt(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(format = %config.format, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the named file, or the default file if it exists, or defaults.
    ///
    /// A file named explicitly must exist; the default file is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns this config with the output format replaced when `format` is set.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
