// src/main.rs

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use serendipity_backend::api;
use serendipity_backend::config::AppConfig;
use serendipity_backend::llm::{CompletionGateway, OpenAiClient};
use serendipity_backend::state::AppState;
use tower_http::cors::{Any, CorsLayer};

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::from_env();
    config.validate()?;

    info!("Starting Serendipity backend");
    info!("Model: {}", config.openai.model);

    let client = Arc::new(OpenAiClient::new(&config.openai));
    let app_state = Arc::new(AppState::new(CompletionGateway::new(client)));

    // All endpoints are open to any origin; there is no auth surface.
    let app = api::http::routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}
