use crate::build_router;
use crate::error::{Result as ServerErrorResult, ServerError};

use coll_ws::{AppState, ConnectionGate, ShutdownCoordinator};

use std::net::SocketAddr;

use axum::Router;
use log::info;
use tokio::net::TcpListener;

/// Admission-controlled WebSocket server.
///
/// Owns the shared state (connection gate, metrics, shutdown coordinator)
/// and, once serving, the listening socket.
pub struct Server {
    address: String,
    connection_limit: usize,
    state: AppState,
}

impl Server {
    /// `connection_limit` of `0` admits any number of sessions
    pub fn new(address: impl Into<String>, connection_limit: usize) -> Self {
        Self {
            address: address.into(),
            connection_limit,
            state: AppState::new(connection_limit),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn connection_limit(&self) -> usize {
        self.connection_limit
    }

    pub fn gate(&self) -> &ConnectionGate {
        &self.state.gate
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Handle for triggering graceful shutdown from outside the server
    pub fn shutdown_coordinator(&self) -> ShutdownCoordinator {
        self.state.shutdown.clone()
    }

    /// Router sending every request through the gate to a session
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind `address` and serve until shutdown. Bind and accept failures are fatal.
    pub async fn serve(self) -> ServerErrorResult<()> {
        let listener = TcpListener::bind(&self.address)
            .await
            .map_err(|source| ServerError::Bind {
                address: self.address.clone(),
                source,
            })?;

        self.serve_on(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve_on(self, listener: TcpListener) -> ServerErrorResult<()> {
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Serve { source })?;

        if self.connection_limit == 0 {
            info!("Server listening on {local_addr} (no connection limit)");
        } else {
            info!(
                "Server listening on {local_addr} (max {} connections)",
                self.connection_limit
            );
        }

        let shutdown = self.shutdown_coordinator();
        let app = self.router();

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await
        .map_err(|source| ServerError::Serve { source })
    }
}
