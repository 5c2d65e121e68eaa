use crate::error::NewsletterError;
use axum::Router;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve `app` on all interfaces until SIGINT/SIGTERM.
///
/// `shutdown_token` is cancelled when a signal arrives so the refresh
/// scheduler stops together with the server.
pub async fn serve(
    app: Router,
    http_port: u16,
    shutdown_token: CancellationToken,
) -> Result<(), NewsletterError> {
    let bind_addr = format!("0.0.0.0:{http_port}");
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| NewsletterError::Bind {
            address: bind_addr.clone(),
            source: e,
        })?;
    info!("Old County Times listening on {}", listener.local_addr()?);
    info!("  - GET  /                    (newsletter page)");
    info!("  - GET  /api/newsletter-data (newsletter JSON)");
    info!("  - GET  /js/*, /img/*        (static assets)");
    info!("  - GET  /health              (health check)");

    let server_shutdown = shutdown_token.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                () = shutdown_signal() => server_shutdown.cancel(),
                () = server_shutdown.cancelled() => {}
            }
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
