use crate::SessionState;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Invalid session transition from {from} to {to} {location}")]
    InvalidTransition {
        from: SessionState,
        to: SessionState,
        location: ErrorLocation,
    },
}

impl WsError {
    /// Short label used for metrics and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
