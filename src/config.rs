//! Host configuration loaded from TOML.
//!
//! Lookup order: `$TETROGRID_CONFIG`, then `./tetrogrid.toml`. A missing file
//! means defaults; a present but malformed file is an error, and so is a
//! pause key that restart or quit already use.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::input::map::{is_valid_pause_key, DEFAULT_PAUSE_KEY};

/// Environment variable that points at a config file
pub const CONFIG_ENV: &str = "TETROGRID_CONFIG";

/// Config file looked up in the working directory
pub const CONFIG_FILE_PATH: &str = "tetrogrid.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the piece randomizer; random when unset
    pub seed: Option<u64>,
    /// Key that toggles pause
    pub pause_key: char,
    /// Where log records go (the terminal is busy drawing)
    pub log_file: PathBuf,
    /// Default filter for env_logger; `RUST_LOG` wins when set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            pause_key: DEFAULT_PAUSE_KEY,
            log_file: PathBuf::from("tetrogrid.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_pause_key(self.pause_key) {
            return Err(ConfigError::Invalid(format!(
                "pause_key {:?} is already bound",
                self.pause_key
            )));
        }
        Ok(())
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Load from the standard location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }
}

/// Path the host reads its config from
pub fn config_file_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(CONFIG_FILE_PATH),
    }
}

// Custom error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "cannot read config: {}", err),
            ConfigError::Parse(err) => write!(f, "invalid config: {}", err),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}
