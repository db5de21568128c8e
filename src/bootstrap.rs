//! # Watcher Bootstrap
//!
//! Wires configuration, clients and the two background tasks together:
//!
//! 1. bind the liveness listener (fails fast if the port is taken)
//! 2. spawn the liveness server
//! 3. spawn the monitor loop, which runs its first cycle immediately
//!
//! The returned [`WatchSystemHandle`] owns the stop signals of both tasks.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::catalog::{CatalogSource, KspCatalogClient};
use crate::clock::{Clock, SystemClock};
use crate::config::WatchConfig;
use crate::constants::SEARCH_TERM;
use crate::error::{Result, WatchError};
use crate::messaging::{Notifier, TelegramNotifier};
use crate::monitor::CatalogMonitor;
use crate::state_machine::MonitorState;
use crate::web;

/// Running watcher; dropping it stops both tasks
pub struct WatchSystemHandle {
    local_addr: SocketAddr,
    monitor_shutdown: oneshot::Sender<()>,
    web_shutdown: oneshot::Sender<()>,
    monitor_task: JoinHandle<MonitorState>,
    web_task: JoinHandle<Result<()>>,
}

impl WatchSystemHandle {
    /// Address the liveness endpoint is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop both tasks and wait for them. Returns the monitor's final state.
    pub async fn shutdown(self) -> Result<MonitorState> {
        info!("🛑 SHUTDOWN: Stopping monitor and liveness endpoint");

        let _ = self.monitor_shutdown.send(());
        let _ = self.web_shutdown.send(());

        let state = self
            .monitor_task
            .await
            .map_err(|e| WatchError::TaskError(format!("monitor: {e}")))?;

        match self.web_task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(e) => return Err(WatchError::TaskError(format!("liveness: {e}"))),
        }

        info!("✅ SHUTDOWN: Complete");
        Ok(state)
    }
}

pub struct WatchSystem;

impl WatchSystem {
    /// Bootstrap with the real KSP client, Telegram notifier and system clock
    pub async fn bootstrap(config: WatchConfig) -> Result<WatchSystemHandle> {
        let source = Arc::new(KspCatalogClient::new(&config)?);
        let notifier = Arc::new(TelegramNotifier::new(&config)?);
        Self::bootstrap_with(config, source, notifier, Arc::new(SystemClock)).await
    }

    /// Bootstrap with explicit collaborators
    pub async fn bootstrap_with(
        config: WatchConfig,
        source: Arc<dyn CatalogSource>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Result<WatchSystemHandle> {
        info!(
            search_term = SEARCH_TERM,
            port = config.port,
            "🔍 Starting KSP monitor bot (daily 11 AM reminder)"
        );

        let listener = web::bind(config.port).await?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| WatchError::ServerError(e.to_string()))?;

        let (web_shutdown, web_shutdown_rx) = oneshot::channel();
        let web_task = tokio::spawn(async move {
            let result = web::serve(listener, web_shutdown_rx).await;
            if let Err(e) = &result {
                error!("Liveness endpoint error: {}", e);
            }
            result
        });

        let (monitor_shutdown, monitor_shutdown_rx) = oneshot::channel();
        let monitor = CatalogMonitor::new(&config, source, notifier, clock);
        let monitor_task = tokio::spawn(monitor.run(monitor_shutdown_rx));

        info!("🎉 BOOTSTRAP: Monitor and liveness endpoint started on {}", local_addr);

        Ok(WatchSystemHandle {
            local_addr,
            monitor_shutdown,
            web_shutdown,
            monitor_task,
            web_task,
        })
    }
}
