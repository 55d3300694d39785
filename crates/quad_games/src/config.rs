//! Console game configuration, loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the console driver.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause shown while the computer "thinks", in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Pause after the computer moves, before the next prompt.
    #[serde(default = "default_post_move_delay_ms")]
    post_move_delay_ms: u64,

    /// Clear the terminal before each board render.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Fixed seed for the computer's random choices.
    #[serde(default)]
    seed: Option<u64>,

    /// Where tracing output goes.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_thinking_delay_ms() -> u64 {
    900
}

fn default_post_move_delay_ms() -> u64 {
    500
}

fn default_clear_screen() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("quad_games.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
            post_move_delay_ms: default_post_move_delay_ms(),
            clear_screen: default_clear_screen(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Configuration with no pauses and no screen clearing.
    pub fn instant() -> Self {
        Self {
            thinking_delay_ms: 0,
            post_move_delay_ms: 0,
            clear_screen: false,
            ..Self::default()
        }
    }

    /// Overrides the computer's seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the thinking pause.
    pub fn with_thinking_delay_ms(mut self, ms: u64) -> Self {
        self.thinking_delay_ms = ms;
        self
    }

    /// Overrides screen clearing.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Overrides the log file path.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
    }

    /// Thinking pause as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// Post-move pause as a [`Duration`].
    pub fn post_move_delay(&self) -> Duration {
        Duration::from_millis(self.post_move_delay_ms)
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
