pub mod app_state;
pub mod connection_config;
pub mod connection_gate;
pub mod connection_permit;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod remote_addr;
pub mod session;
pub mod session_state;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

pub use app_state::{AppState, CONNECTION_LIMIT_REACHED, HANDSHAKE_EXPECTED, handler};
pub use connection_config::ConnectionConfig;
pub use connection_gate::ConnectionGate;
pub use connection_permit::ConnectionPermit;
pub use error::{Result, WsError};
pub use frame::Frame;
pub use metrics::Metrics;
pub use remote_addr::RemoteAddr;
pub use session::Session;
pub use session_state::SessionState;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;

#[cfg(test)]
mod tests;
