//! Serveur HTTP de rotation quotidienne.
//!
//! ```bash
//! PORT=3000 ROTATION_START_DATE=2024-01-01 cargo run --bin daily-rotator-server
//! ```
//!
//! Variables : `HOST`, `PORT`, `ROTATION_START_DATE`, `ROTATION_START_ITEM`, `RUST_LOG`.
#![forbid(unsafe_code)]

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

use daily_rotator::http::{create_router, AppState};
use daily_rotator::{ServerConfig, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let defaults = config.defaults().context("invalid default rotation anchor")?;
    info!(
        start_date = %defaults.start_date,
        start_item = defaults.start_item,
        "starting daily rotation server"
    );

    let state = AppState::new(Arc::new(SystemClock), defaults);
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
