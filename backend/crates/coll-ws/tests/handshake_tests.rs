mod common;

use common::{test_client::WsTestClient, test_server::create_test_server};

#[tokio::test]
async fn given_plain_http_request_when_handled_then_rejected_400() {
    // Given
    let test_server = create_test_server(2);

    // When
    let response = test_server.server.get("/").await;

    // Then
    response.assert_status_bad_request();
    response.assert_text("Websocket handshake expected");
}

#[tokio::test]
async fn given_plain_http_request_when_handled_then_permit_count_unchanged() {
    // Given
    let test_server = create_test_server(2);
    let before = test_server.app_state.gate.available();

    // When
    test_server
        .server
        .get("/anything")
        .await
        .assert_status_bad_request();

    // Then
    assert_eq!(test_server.app_state.gate.available(), before);
}

#[tokio::test]
async fn given_post_request_when_handled_then_rejected_400() {
    // Given
    let test_server = create_test_server(0);

    // When
    let response = test_server.server.post("/").await;

    // Then
    response.assert_status_bad_request();
    assert_eq!(test_server.app_state.gate.in_use(), 0);
}

#[tokio::test]
async fn given_repeated_bad_handshakes_when_handled_then_valid_client_still_admitted() {
    // Given - a limit of one, hammered with plain requests
    let test_server = create_test_server(1);
    for _ in 0..10 {
        test_server.server.get("/").await.assert_status_bad_request();
    }

    // When
    let client = WsTestClient::connect(&test_server.server).await;

    // Then
    assert_eq!(test_server.app_state.gate.available(), Some(0));
    client.close().await;
}

#[tokio::test]
async fn given_server_at_limit_when_plain_request_then_limit_checked_first() {
    // Given
    let test_server = create_test_server(1);
    let _client = WsTestClient::connect(&test_server.server).await;

    // When
    let response = test_server.server.get("/").await;

    // Then - admission runs before the handshake check
    response.assert_status_service_unavailable();
}
