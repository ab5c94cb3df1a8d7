use std::fmt;

use axum::extract::ws::Message;

/// Data frame kinds read from a session. Payloads are not interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Binary,
    Text,
}

impl Frame {
    /// Classify a data message; control messages (ping, pong, close) yield `None`.
    pub fn classify(message: &Message) -> Option<Self> {
        match message {
            Message::Binary(_) => Some(Frame::Binary),
            Message::Text(_) => Some(Frame::Text),
            Message::Ping(_) | Message::Pong(_) | Message::Close(_) => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frame::Binary => "binary",
            Frame::Text => "text",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
