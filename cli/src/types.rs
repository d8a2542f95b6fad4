use crate::config::{Overrides, Settings};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Settings flags shared by every subcommand
///
/// Flags win over their environment variables; both win over the config
/// file.
#[derive(Debug, Clone, Default, Args)]
pub struct SettingsArgs {
    /// Config file (defaults to ~/.config/holocron/config.toml if present)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "HOLOCRON_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT")]
    pub port: Option<u16>,

    /// Database URL (sqlite:////absolute.db, sqlite:///relative.db, sqlite://)
    #[arg(long, env = "DATABASE_URL", value_name = "URL")]
    pub database_url: Option<String>,

    /// Directory for the daily-rotated log file
    #[arg(long, env = "HOLOCRON_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log to stderr only
    #[arg(long)]
    pub no_log_file: bool,
}

impl SettingsArgs {
    pub fn resolve(&self) -> Result<Settings> {
        Settings::load(
            self.config.as_deref(),
            Overrides {
                host: self.host.clone(),
                port: self.port,
                database_url: self.database_url.clone(),
                log_dir: self.log_dir.clone(),
                no_log_file: self.no_log_file,
            },
        )
    }
}
