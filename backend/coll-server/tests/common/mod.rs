#![allow(dead_code)]

//! Test infrastructure for coll-server tests

use coll_server::Server;

use std::net::SocketAddr;

use axum_test::TestServer;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, sleep};

/// Serve `server`'s router through axum-test over a real HTTP transport
pub fn create_test_server(server: &Server) -> TestServer {
    TestServer::builder()
        .http_transport()
        .build(server.router())
        .expect("Failed to create test server")
}

/// Run `server` on an ephemeral local port
pub async fn spawn_server(
    server: Server,
) -> (SocketAddr, JoinHandle<coll_server::ServerErrorResult<()>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    let handle = tokio::spawn(server.serve_on(listener));
    (addr, handle)
}

/// Poll until `check` holds, or panic after five seconds
pub async fn eventually(mut check: impl FnMut() -> bool, what: &str) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !check() {
        assert!(Instant::now() < deadline, "timed out waiting for {what}");
        sleep(Duration::from_millis(10)).await;
    }
}
