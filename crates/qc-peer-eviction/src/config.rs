//! Configuration for connection eviction
//!
//! ```toml
//! [penalty]
//! incoming_is_bad = true
//! outgoing_is_bad = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DirectionPenalty;

/// Eviction policy settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvictionConfig {
    /// Which connection directions rank worse
    #[serde(default)]
    pub penalty: DirectionPenalty,
}

impl EvictionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config {path}: {error}")]
    Io { path: String, error: String },

    /// TOML syntax or schema error
    #[error("Failed to parse config: {0}")]
    Parse(String),
}
