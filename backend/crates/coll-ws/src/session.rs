use crate::{
    ConnectionPermit, Frame, Metrics, RemoteAddr, Result as WsErrorResult, SessionState,
    ShutdownGuard, WsError,
};

use std::fmt::Display;
use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use log::{debug, info, warn};

/// One admitted connection, from handshake to close.
///
/// The session owns the permit it was admitted with. The permit is released
/// when the session is dropped, whichever way the session ends.
pub struct Session {
    remote_addr: RemoteAddr,
    state: SessionState,
    metrics: Metrics,
    _permit: ConnectionPermit,
}

impl Session {
    pub fn new(remote_addr: RemoteAddr, permit: ConnectionPermit, metrics: Metrics) -> Self {
        Self {
            remote_addr,
            state: SessionState::Handshaking,
            metrics,
            _permit: permit,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remote_addr(&self) -> RemoteAddr {
        self.remote_addr
    }

    /// Move to `next`, rejecting transitions the lifecycle does not allow
    #[track_caller]
    pub fn transition(&mut self, next: SessionState) -> WsErrorResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(WsError::InvalidTransition {
                from: self.state,
                to: next,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!(
            "Session from {} moved from {} to {}",
            self.remote_addr, self.state, next
        );
        self.state = next;
        Ok(())
    }

    /// End a session whose request was not a valid WebSocket handshake
    pub fn reject_handshake(mut self, reason: &dyn Display) {
        warn!(
            "Websocket handshake from {} rejected: {}",
            self.remote_addr, reason
        );
        self.metrics.handshake_failed();
        self.state = SessionState::Closed;
    }

    /// Drain the upgraded connection until the peer goes away or shutdown is signalled
    pub async fn run(
        mut self,
        mut socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        self.transition(SessionState::Open)?;

        info!("Websocket connection from {} established.", self.remote_addr);
        self.metrics.connection_established();

        let result = loop {
            tokio::select! {
                msg = socket.recv() => {
                    match msg {
                        Some(Ok(msg)) => self.handle_message(msg),
                        Some(Err(e)) => {
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {e}"),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => break Ok(()),
                    }
                }

                _ = shutdown_guard.wait() => {
                    info!("Shutting down connection from {} gracefully", self.remote_addr);
                    break Ok(());
                }
            }
        };

        self.transition(SessionState::Closed)?;

        info!("Websocket connection from {} closed.", self.remote_addr);
        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        if let Err(ref e) = result {
            self.metrics.error_occurred(e.error_code());
        }

        result
    }

    /// Classify and discard one message. Pings are answered by the protocol layer.
    fn handle_message(&self, msg: Message) {
        match Frame::classify(&msg) {
            Some(frame) => {
                self.metrics.frame_received(frame.as_str());
            }
            None => {
                if let Message::Close(_) = msg {
                    debug!("Received close frame from {}", self.remote_addr);
                }
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.state.is_terminal() {
            debug!(
                "Session from {} dropped while {}",
                self.remote_addr, self.state
            );
            self.state = SessionState::Closed;
        }
    }
}
