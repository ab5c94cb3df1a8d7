#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket, WsMessage};
use bytes::Bytes;

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the endpoint at `path`; panics unless the upgrade succeeds
    pub async fn connect_to(server: &TestServer, path: &str) -> Self {
        let ws = server.get_websocket(path).await.into_websocket().await;

        Self { ws }
    }

    /// Connect to the root path
    pub async fn connect(server: &TestServer) -> Self {
        Self::connect_to(server, "/").await
    }

    /// Send binary message
    pub async fn send_binary(&mut self, data: impl Into<Bytes>) {
        let bytes = data.into();
        self.ws.send_message(WsMessage::Binary(bytes)).await;
    }

    /// Send text message
    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Open `count` sessions against the same server
pub async fn connect_many(server: &TestServer, count: usize) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(server).await);
    }
    clients
}
