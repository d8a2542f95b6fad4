//! Directory path management for holocron
//!
//! All default paths used by holocron are centralized here.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the base holocron config directory (~/.config/holocron/)
pub fn get_holocron_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Failed to get config directory")?
        .join("holocron"))
}

/// Get the default config file path (~/.config/holocron/config.toml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_holocron_dir()?.join("config.toml"))
}

/// Get the default log directory
///
/// - XDG_DATA_HOME/holocron/logs/ on Unix (typically ~/.local/share/holocron/logs/)
/// - ~/Library/Application Support/holocron/logs/ on macOS
/// - {FOLDERID_LocalAppData}/holocron/logs/ on Windows
pub fn get_log_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .context("Failed to determine data directory (XDG_DATA_HOME or platform equivalent)")?;

    Ok(data_dir.join("holocron").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_under_holocron_dir() {
        let base = get_holocron_dir().unwrap();
        assert!(base.ends_with("holocron"));
        assert_eq!(get_config_path().unwrap(), base.join("config.toml"));
    }

    #[test]
    fn test_get_log_dir() {
        let log_dir = get_log_dir().expect("Should get log dir");
        assert!(log_dir.ends_with("holocron/logs"));
    }
}
