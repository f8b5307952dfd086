//! Configuration loading for the dispatch engine.

use crate::command::DEFAULT_PREFIX;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating a [`DispatchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Engine configuration.
///
/// Every field has a default, so an empty file (or no file at all, via
/// `DispatchConfig::default()`) yields a working engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Prefix seeded into the engine's registry at startup.
    pub default_prefix: String,
    /// Whether ordinary chat text is also scanned for commands, in addition
    /// to text the host already flagged as command input.
    pub forward_chat: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_prefix: DEFAULT_PREFIX.to_string(),
            forward_chat: true,
        }
    }
}

impl DispatchConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "default_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
