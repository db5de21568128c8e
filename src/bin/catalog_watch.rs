//! # Catalog Watch
//!
//! Polls the KSP catalog and reports product count changes to Telegram.
//! Requires `BOT_TOKEN` and `CHAT_ID`; `PORT` sets the liveness port.

use anyhow::Context;
use tokio::signal;
use tracing::info;

use catalog_watch::logging::init_structured_logging;
use catalog_watch::{WatchConfig, WatchSystem};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let config = WatchConfig::from_env().context("BOT_TOKEN and CHAT_ID must be set")?;
    let handle = WatchSystem::bootstrap(config).await?;

    wait_for_shutdown_signal().await?;
    info!("Shutdown signal received");

    let state = handle.shutdown().await?;
    info!(last_count = ?state.last_count, "Catalog watch stopped");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() -> anyhow::Result<()> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    tokio::select! {
        result = signal::ctrl_c() => result?,
        _ = terminate.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() -> anyhow::Result<()> {
    signal::ctrl_c().await?;
    Ok(())
}
