pub mod router;
pub mod server;
mod state;
pub mod tracing;

use crate::config;
use crate::error::ServiceError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), ServiceError> {
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

    let settings =
        config::get_configuration().map_err(|e| ServiceError::Config(e.to_string()))?;
    ::tracing::info!("Loaded settings");

    let shutdown_token = CancellationToken::new();

    let app_state = state::AppState::from_settings(&settings).await?;
    let app = router::api_router(app_state.sink);

    server::serve(app, settings.http_port, shutdown_token).await
}
