pub mod router;
pub mod server;
mod state;
pub mod tracing;

use crate::config;
use crate::error::NewsletterError;
use tokio_util::sync::CancellationToken;

pub use router::build_router;
pub use state::AppState;

/// Application entry point. Initializes tracing, configuration, the refresh
/// scheduler and the HTTP server.
pub async fn run() -> Result<(), NewsletterError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        port = settings.http_port,
        refresh_interval = ?settings.refresh_interval,
        static_dir = %settings.static_dir.display(),
        "Loaded settings"
    );

    // Shared shutdown token: stops the scheduler together with the server
    let shutdown_token = CancellationToken::new();

    let app_state = AppState::from_settings(&settings, shutdown_token.clone());
    let app = build_router(app_state.store, &settings.static_dir);

    server::serve(app, settings.http_port, shutdown_token).await?;

    if let Err(e) = app_state.scheduler.await {
        ::tracing::error!("Refresh scheduler task failed: {}", e);
    }
    Ok(())
}
