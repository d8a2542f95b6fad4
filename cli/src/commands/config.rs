use crate::config::{io, render_config};
use crate::types::SettingsArgs;
use anyhow::Result;

/// Print the effective settings as TOML
pub fn show_config(settings: &SettingsArgs) -> Result<()> {
    let source = io::config_source(settings.config.as_deref())?;
    let resolved = settings.resolve()?;

    let origin = if source.exists() {
        source.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    println!("# Resolved from {origin}, environment and flags");
    print!("{}", render_config(&resolved.to_config())?);
    Ok(())
}
