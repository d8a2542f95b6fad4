use crate::db::Store;
use crate::types::SettingsArgs;
use anyhow::{Context, Result};
use clap::Args;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

pub async fn handle_serve_command(args: ServeArgs) -> Result<()> {
    let settings = args.settings.resolve()?;

    crate::logging::init(settings.log_dir.as_deref(), args.verbose)?;

    if args.verbose {
        tracing::info!("Verbose logging enabled");
    }
    tracing::info!("Opening database {}", settings.database);

    let store = Store::open(&settings.database)?;

    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    eprintln!("Starting holocron API server...");
    eprintln!("Listening on http://{}", addr);

    crate::server::serve(listener, store, crate::server::ctrl_c()).await
}
