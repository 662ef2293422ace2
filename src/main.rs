use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use pharmacy_inventory::app::app;
use pharmacy_inventory::config;
use pharmacy_inventory::database::DatabaseManager;
use pharmacy_inventory::handlers::AppState;
use pharmacy_inventory::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and friends
    let _ = dotenvy::dotenv();
    logging::init(logging::DEFAULT_FILTER);

    let config = config::config().clone();
    info!("Starting Pharmacy Inventory API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect_lazy(&config.database)
        .context("failed to create database pool")?;
    if config.database.auto_migrate {
        // Runs in the background so an unreachable database does not hold up the listener
        let pool = pool.clone();
        tokio::spawn(async move { DatabaseManager::bootstrap(&pool).await });
    }

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Pharmacy Inventory API listening on http://{}", bind_addr);

    axum::serve(listener, app(AppState::new(pool.clone(), config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close(&pool).await;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            warn!("Unable to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
