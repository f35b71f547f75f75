//! Petstore server: loads settings, prepares the pet table, then serves the API.
//!
//! Run from repo root: `cargo run -p petstore-server`

use petstore::{app, open_store, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("petstore=info,petstore_server=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    // Table setup happens here, before any request can arrive.
    let store = open_store(&settings).await?;
    let router = app(AppState::new(store), settings.body_limit);

    let listener = TcpListener::bind(settings.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
