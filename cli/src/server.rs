//! HTTP server lifecycle

use crate::db::Store;
use crate::routes::{self, AppState};
use anyhow::Result;
use std::future::Future;
use tokio::net::TcpListener;

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, store: Store, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = routes::router(AppState::new(store));

    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C
pub async fn ctrl_c() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Received shutdown signal...");
}
