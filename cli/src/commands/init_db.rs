use crate::db::Store;
use crate::types::SettingsArgs;
use anyhow::Result;

/// Create the schema in the configured database and exit
///
/// Tables are created only when missing, so running this against an
/// existing database leaves its rows untouched.
pub fn init_db(settings: &SettingsArgs) -> Result<()> {
    let settings = settings.resolve()?;
    crate::logging::init(None, false)?;

    Store::open(&settings.database)?;

    tracing::info!("Schema ready in {}", settings.database);
    println!("Database ready: {}", settings.database);
    Ok(())
}
