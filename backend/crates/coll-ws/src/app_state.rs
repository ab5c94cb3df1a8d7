use crate::{
    ConnectionConfig, ConnectionGate, Metrics, RemoteAddr, Session, ShutdownCoordinator,
    ShutdownGuard,
};

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info, warn};

pub const CONNECTION_LIMIT_REACHED: &str = "Connection limit reached";
pub const HANDSHAKE_EXPECTED: &str = "Websocket handshake expected";

/// Shared application state for WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub gate: ConnectionGate,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl AppState {
    /// State admitting at most `connection_limit` sessions (`0` = unlimited)
    pub fn new(connection_limit: usize) -> Self {
        Self {
            gate: ConnectionGate::new(connection_limit),
            metrics: Metrics::new(),
            shutdown: ShutdownCoordinator::new(),
            config: ConnectionConfig::default(),
        }
    }
}

/// Admission-controlled WebSocket upgrade handler. Serves every path.
pub async fn handler(
    State(state): State<AppState>,
    remote_addr: RemoteAddr,
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    let Some(permit) = state.gate.try_acquire() else {
        warn!("Connection from {remote_addr} refused. Limit reached.");
        state.metrics.connection_rejected();
        return (StatusCode::SERVICE_UNAVAILABLE, CONNECTION_LIMIT_REACHED).into_response();
    };

    let session = Session::new(remote_addr, permit, state.metrics.clone());

    let upgrade = match upgrade {
        Ok(upgrade) => upgrade,
        Err(rejection) => {
            session.reject_handshake(&rejection);
            return (StatusCode::BAD_REQUEST, HANDSHAKE_EXPECTED).into_response();
        }
    };

    let shutdown_guard = state.shutdown.subscribe_guard();
    let metrics = state.metrics.clone();

    upgrade
        .read_buffer_size(state.config.read_buffer_size)
        .write_buffer_size(state.config.write_buffer_size)
        .on_failed_upgrade(move |e| {
            error!("Websocket upgrade from {remote_addr} failed: {e}");
            metrics.handshake_failed();
        })
        .on_upgrade(move |socket| handle_socket(socket, session, shutdown_guard))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(socket: WebSocket, session: Session, shutdown_guard: ShutdownGuard) {
    let remote_addr = session.remote_addr();

    if let Err(e) = session.run(socket, shutdown_guard).await {
        info!("Connection from {remote_addr} ended with error: {e}");
    }
}
