//! Runtime configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_rules::Mark;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Longest transition delay accepted from a config file.
const MAX_DELAY_MS: u64 = 10_000;

/// Match configuration.
///
/// ```toml
/// starting_mark = "O"
/// log_file = "noughts_tui.log"
///
/// [presentation]
/// start_delay_ms = 900
/// prompt_delay_ms = 800
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct NoughtsConfig {
    /// Mark that opens every session.
    starting_mark: Mark,

    /// Log destination for the terminal UI.
    log_file: PathBuf,

    /// Presentation timings.
    presentation: PresentationConfig,
}

impl Default for NoughtsConfig {
    fn default() -> Self {
        Self {
            starting_mark: Mark::X,
            log_file: PathBuf::from("noughts_tui.log"),
            presentation: PresentationConfig::default(),
        }
    }
}

/// Pauses the terminal UI inserts around transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct PresentationConfig {
    /// Pause after the start trigger before the first board appears.
    start_delay_ms: u64,

    /// Pause after an outcome before the play-again prompt appears.
    prompt_delay_ms: u64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 900,
            prompt_delay_ms: 800,
        }
    }
}

impl PresentationConfig {
    /// Start delay as a [`Duration`].
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    /// Prompt delay as a [`Duration`].
    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }
}

impl NoughtsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(starting_mark = %config.starting_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let presentation = &self.presentation;
        if presentation.start_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::new(format!(
                "presentation.start_delay_ms must be at most {}",
                MAX_DELAY_MS
            )));
        }
        if presentation.prompt_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::new(format!(
                "presentation.prompt_delay_ms must be at most {}",
                MAX_DELAY_MS
            )));
        }
        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::new("log_file must not be empty".to_string()));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(NoughtsConfig::from_toml("").unwrap(), NoughtsConfig::default());
    }

    #[test]
    fn test_partial_presentation_table() {
        let config = NoughtsConfig::from_toml("[presentation]\nstart_delay_ms = 0\n").unwrap();
        assert_eq!(*config.presentation().start_delay_ms(), 0);
        assert_eq!(*config.presentation().prompt_delay_ms(), 800);
    }

    #[test]
    fn test_lowercase_mark() {
        let config = NoughtsConfig::from_toml("starting_mark = \"o\"").unwrap();
        assert_eq!(*config.starting_mark(), Mark::O);
    }

    #[test]
    fn test_unknown_mark_rejected() {
        let err = NoughtsConfig::from_toml("starting_mark = \"Z\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_delay_too_long_rejected() {
        let err = NoughtsConfig::from_toml("[presentation]\nprompt_delay_ms = 60000\n").unwrap_err();
        assert!(err.message.contains("prompt_delay_ms"));
    }

    #[test]
    fn test_setters() {
        let config = NoughtsConfig::default().with_starting_mark(Mark::O);
        assert_eq!(*config.starting_mark(), Mark::O);
    }
}
