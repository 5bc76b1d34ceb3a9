mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let (registry, runtimes) = startup::launch_bots(&config).await;

    if registry.is_empty() {
        tracing::warn!("No bot tokens configured; only the status server will run");
    }

    let app = router::router()
        .with_state(AppState::new(Arc::new(registry), config.mode))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("🌐 Web server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    startup::shutdown_bots(runtimes).await;

    Ok(())
}
