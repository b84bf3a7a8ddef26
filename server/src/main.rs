//! carbrands server: connects the pool, mounts the routes and serves until Ctrl+C or SIGTERM.
//!
//! Run from repo root: `cargo run -p carbrands-server`

use carbrands_api::{app, AppState, PgBrandStore, ServerConfig};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "carbrands_api=info,carbrands_server=info,tower_http=info",
                )
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;

    let state = AppState::new(PgBrandStore::new(pool));
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("carbrands listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
