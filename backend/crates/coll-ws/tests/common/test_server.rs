#![allow(dead_code)]

use coll_ws::{AppState, ConnectionGate};

use axum::Router;
use axum_test::TestServer;
use tokio::time::{Duration, Instant, sleep};

/// How long to wait for a session to notice a disconnect
pub const RELEASE_TIMEOUT: Duration = Duration::from_secs(5);

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer admitting at most `connection_limit` sessions (0 = unlimited)
pub fn create_test_server(connection_limit: usize) -> TestServerWithState {
    let app_state = AppState::new(connection_limit);
    let app = Router::new()
        .fallback(coll_ws::handler)
        .with_state(app_state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Poll until the gate reports `expected` free permits, or panic after RELEASE_TIMEOUT
pub async fn wait_for_available(gate: &ConnectionGate, expected: usize) {
    let deadline = Instant::now() + RELEASE_TIMEOUT;
    while gate.available() != Some(expected) {
        assert!(
            Instant::now() < deadline,
            "gate never reached {expected} available permits (now {:?})",
            gate.available()
        );
        sleep(Duration::from_millis(10)).await;
    }
}

/// Poll until the gate reports `expected` permits held, or panic after RELEASE_TIMEOUT
pub async fn wait_for_in_use(gate: &ConnectionGate, expected: usize) {
    let deadline = Instant::now() + RELEASE_TIMEOUT;
    while gate.in_use() != expected {
        assert!(
            Instant::now() < deadline,
            "gate never reached {expected} permits in use (now {})",
            gate.in_use()
        );
        sleep(Duration::from_millis(10)).await;
    }
}
