//! Listener setup and graceful shutdown.

use axum::Router;
use tokio::net::TcpListener;

use roster_config::ServerConfig;

/// Bind to the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or serving fails.
pub async fn serve(config: &ServerConfig, router: Router) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "roster listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
