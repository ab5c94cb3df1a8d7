mod common;

use common::{
    test_client::{WsTestClient, connect_many},
    test_server::{create_test_server, wait_for_available},
};

use tokio::time::{Duration, sleep};

#[tokio::test]
async fn given_open_session_when_frames_sent_then_drained_and_session_stays_open() {
    // Given
    let test_server = create_test_server(1);
    let mut client = WsTestClient::connect(&test_server.server).await;

    // When
    client.send_text("hello").await;
    client.send_binary(vec![0u8, 1, 2, 3]).await;
    client.send_text("world").await;
    sleep(Duration::from_millis(50)).await;

    // Then - still holding the only permit
    assert_eq!(test_server.app_state.gate.available(), Some(0));
    test_server
        .server
        .get_websocket("/")
        .await
        .assert_status_service_unavailable();

    client.close().await;
    wait_for_available(&test_server.app_state.gate, 1).await;
}

#[tokio::test]
async fn given_open_session_when_peer_drops_without_close_then_permit_released() {
    // Given
    let test_server = create_test_server(1);
    let client = WsTestClient::connect(&test_server.server).await;

    // When - abrupt disconnect
    drop(client);

    // Then
    wait_for_available(&test_server.app_state.gate, 1).await;
}

#[tokio::test]
async fn given_open_sessions_when_shutdown_triggered_then_all_permits_released() {
    // Given
    let test_server = create_test_server(3);
    let _clients = connect_many(&test_server.server, 3).await;
    wait_for_available(&test_server.app_state.gate, 0).await;

    // When
    test_server.app_state.shutdown.shutdown();

    // Then
    wait_for_available(&test_server.app_state.gate, 3).await;
}

#[tokio::test]
async fn given_many_sessions_when_all_close_then_gate_back_to_capacity() {
    // Given
    let test_server = create_test_server(5);
    let clients = connect_many(&test_server.server, 5).await;

    // When
    for client in clients {
        client.close().await;
    }

    // Then - exactly capacity, never more
    wait_for_available(&test_server.app_state.gate, 5).await;
    assert_eq!(test_server.app_state.gate.in_use(), 0);
}
