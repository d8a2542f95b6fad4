//! Configuration file I/O operations
//!
//! Reading and rendering the holocron configuration file. All loads are
//! validated before they are returned.

use super::paths::get_config_path;
use super::schema::HolocronConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from `path`, or from the default location when `None`
///
/// An explicitly requested file must exist. The default file is optional:
/// when it is missing the built-in defaults are returned.
pub fn load_config(path: Option<&Path>) -> Result<HolocronConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => {
            let path = get_config_path()?;
            if !path.exists() {
                return Ok(HolocronConfig::default());
            }
            load_config_file(&path)
        }
    }
}

fn load_config_file(path: &Path) -> Result<HolocronConfig> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read config: {}", path.display()))?;

    let config: HolocronConfig =
        toml::from_str(&content).context(format!("Failed to parse config: {}", path.display()))?;

    if let Err(errors) = config.validate() {
        anyhow::bail!(
            "Config validation failed in {}:\n  {}",
            path.display(),
            errors.join("\n  ")
        );
    }

    Ok(config)
}

/// Render a configuration as pretty TOML
pub fn render_config(config: &HolocronConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

/// Resolve the path a `--config` flag would read, for display purposes
pub fn config_source(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => get_config_path(),
    }
}
