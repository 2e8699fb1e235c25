//! Pricing engine HTTP server.
//!
//! # Environment Variables
//!
//! - `PRICING_CONFIG_DIR`: directory holding `shipping.yaml` and `coupons.yaml`
//!   (default: `./config/pricing`)
//! - `PRODUCTS_FILE`: JSON catalog file (default: `./data/products.json`)
//! - `BIND_ADDR`: listen address (default: `0.0.0.0:8000`)
//! - `RUST_LOG`: log filter (default: `info,pricing_engine=debug`)

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pricing_engine::api::{AppState, create_router};
use pricing_engine::catalog::CatalogLoader;
use pricing_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_dir = env_or("PRICING_CONFIG_DIR", "./config/pricing");
    let products_file = env_or("PRODUCTS_FILE", "./data/products.json");
    let bind_addr = env_or("BIND_ADDR", "0.0.0.0:8000");

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading pricing configuration from {}", config_dir))?
        .into_config();
    let catalog = CatalogLoader::load(&products_file)
        .with_context(|| format!("loading catalog from {}", products_file))?;

    let app = create_router(AppState::new(config, catalog));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    info!(addr = %listener.local_addr()?, "Pricing engine listening");
    info!("  GET  /health");
    info!("  GET  /v1/products");
    info!("  GET  /v1/products/:id");
    info!("  POST /v1/pricing/quote");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Pricing engine stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pricing_engine=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
