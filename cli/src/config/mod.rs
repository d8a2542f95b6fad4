//! Configuration management for holocron
//!
//! Settings come from four layers, highest priority first:
//!
//! 1. Command-line flags
//! 2. Environment variables (`PORT`, `DATABASE_URL`, `HOLOCRON_HOST`)
//! 3. The config file (`~/.config/holocron/config.toml` or `--config`)
//! 4. Built-in defaults
//!
//! Layers 1 and 2 are merged by clap before they reach [`Overrides`].
//!
//! ## Architecture
//!
//! - `schema` - Configuration data structures
//! - `io` - Reading and rendering config files
//! - `paths` - Default directory paths
//! - `database_url` - Database URL parsing and normalization

pub mod database_url;
pub mod io;
pub mod paths;
pub mod schema;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use database_url::{DatabaseUrl, DatabaseUrlError};
pub use io::{load_config, render_config};
pub use paths::{get_config_path, get_log_dir};
pub use schema::HolocronConfig;

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub no_log_file: bool,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database: DatabaseUrl,
    /// Directory for the rotated log file, `None` for stderr only
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    /// Load the config file (if any) and apply overrides on top of it
    pub fn load(config_path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file = load_config(config_path)?;
        Self::resolve(file, overrides)
    }

    /// Merge overrides into a loaded config
    pub fn resolve(mut file: HolocronConfig, overrides: Overrides) -> Result<Self> {
        if let Some(host) = overrides.host {
            file.server.host = host;
        }
        if let Some(port) = overrides.port {
            file.server.port = port;
        }
        if let Some(url) = overrides.database_url {
            file.database.url = url;
        }

        if let Err(errors) = file.validate() {
            anyhow::bail!("Invalid settings:\n  {}", errors.join("\n  "));
        }

        let database = DatabaseUrl::parse(&file.database.url)
            .context("Failed to parse database URL")?;

        let log_dir = if overrides.no_log_file || !file.logging.file {
            None
        } else {
            match overrides.log_dir.or(file.logging.directory) {
                Some(dir) => Some(dir),
                None => Some(get_log_dir()?),
            }
        };

        Ok(Self {
            host: file.server.host,
            port: file.server.port,
            database,
            log_dir,
        })
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Render back to the config file layout
    pub fn to_config(&self) -> HolocronConfig {
        let mut config = HolocronConfig::default();
        config.server.host = self.host.clone();
        config.server.port = self.port;
        config.database.url = self.database.to_string();
        config.logging.file = self.log_dir.is_some();
        config.logging.directory = self.log_dir.clone();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let settings = Settings::resolve(
            HolocronConfig::default(),
            Overrides {
                no_log_file: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
        assert_eq!(
            settings.database,
            DatabaseUrl::File(PathBuf::from("/tmp/test.db"))
        );
        assert!(settings.log_dir.is_none());
    }

    #[test]
    fn test_overrides_beat_file() {
        let mut file = HolocronConfig::default();
        file.server.port = 8000;
        file.database.url = "sqlite:///file.db".to_string();

        let settings = Settings::resolve(
            file,
            Overrides {
                port: Some(9000),
                database_url: Some("sqlite://".to_string()),
                log_dir: Some(PathBuf::from("/var/log/holocron")),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(settings.port, 9000);
        assert_eq!(settings.database, DatabaseUrl::InMemory);
        assert_eq!(settings.log_dir, Some(PathBuf::from("/var/log/holocron")));
    }

    #[test]
    fn test_file_disables_log_file() {
        let mut file = HolocronConfig::default();
        file.logging.file = false;
        file.logging.directory = Some(PathBuf::from("/ignored"));

        let settings = Settings::resolve(file, Overrides::default()).unwrap();
        assert!(settings.log_dir.is_none());
    }

    #[test]
    fn test_postgres_url_is_rejected() {
        let err = Settings::resolve(
            HolocronConfig::default(),
            Overrides {
                database_url: Some("postgres://h/db".to_string()),
                no_log_file: true,
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("postgresql://h/db"));
    }

    #[test]
    fn test_port_zero_override_is_rejected() {
        let result = Settings::resolve(
            HolocronConfig::default(),
            Overrides {
                port: Some(0),
                no_log_file: true,
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_to_config_round_trips_settings() {
        let settings = Settings::resolve(
            HolocronConfig::default(),
            Overrides {
                database_url: Some("sqlite:///rel.db".to_string()),
                no_log_file: true,
                ..Default::default()
            },
        )
        .unwrap();

        let config = settings.to_config();
        assert_eq!(config.database.url, "sqlite:///rel.db");
        assert!(!config.logging.file);
    }
}
