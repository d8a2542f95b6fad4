//! Configuration schema for holocron
//!
//! This module defines the data structures for the optional `config.toml`.
//! Every section and field has a default so partial files are accepted.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default listen address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default database when neither the file nor the environment names one
pub const DEFAULT_DATABASE_URL: &str = "sqlite:////tmp/test.db";

/// Main configuration structure for holocron
///
/// Design for extensibility:
/// - All sections use #[serde(default)] to allow partial configs
/// - New top-level sections can be added without breaking existing configs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HolocronConfig {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Database connection settings
    pub database: DatabaseConfig,

    /// Log output settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLAlchemy-style URL, e.g. `sqlite:////tmp/test.db`
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for rotated log files (platform data dir when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Write a log file in addition to stderr
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file: true,
        }
    }
}

impl HolocronConfig {
    /// Validate the configuration for common errors
    ///
    /// Returns Ok(()) if valid, or Err with a list of error messages
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }
        if self.server.port == 0 {
            errors.push("server.port must be between 1 and 65535".to_string());
        }
        if self.database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
