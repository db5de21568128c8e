//! # Liveness Web Endpoint
//!
//! Minimal axum server whose only job is to answer the hosting platform's
//! port-bind health check. It holds no application state and never touches the
//! monitor.

pub mod handlers;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Result, WatchError};

/// Create the liveness router
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(handlers::health::liveness))
        .route("/health", get(handlers::health::liveness))
        .layer(TraceLayer::new_for_http())
}

/// Bind the liveness listener on all interfaces
pub async fn bind(port: u16) -> Result<TcpListener> {
    let bind_address = format!("0.0.0.0:{port}");
    TcpListener::bind(&bind_address)
        .await
        .map_err(|e| WatchError::ServerError(format!("Failed to bind to {bind_address}: {e}")))
}

/// Serve the liveness router until `shutdown` fires or its sender is dropped
pub async fn serve(listener: TcpListener, shutdown: oneshot::Receiver<()>) -> Result<()> {
    let local_addr = listener
        .local_addr()
        .map_err(|e| WatchError::ServerError(e.to_string()))?;
    info!("Liveness endpoint listening on {}", local_addr);

    axum::serve(listener, create_app())
        .with_graceful_shutdown(async {
            let _ = shutdown.await;
        })
        .await
        .map_err(|e| WatchError::ServerError(e.to_string()))
}
