//! Newsdesk server entry point.

use clap::Parser;
use newsdesk::{api, config, Cli, APP_VERSION};

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .init();

    tracing::info!("Newsdesk v{}", APP_VERSION);
    tracing::info!(db = ?cli.db, "Opening storage backend");

    let store = config::open_backend(&cli).await?;
    let app = api::router(store.clone());

    let addr: std::net::SocketAddr = cli.bind.parse()?;
    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    store.close().await;
    Ok(())
}
