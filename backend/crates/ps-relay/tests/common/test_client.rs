#![allow(dead_code)]

use crate::common::test_server::TestServerWithState;

use ps_relay::Message;

use axum_test::{TestResponse, TestWebSocket, WsMessage};
use serde_json::json;

/// WebSocket subscriber wrapper
pub struct SubscriberClient {
    ws: TestWebSocket,
}

impl SubscriberClient {
    /// Open a connection on `/register`. Does not wait for the registry.
    pub async fn connect(test_server: &TestServerWithState) -> Self {
        let ws = test_server
            .server
            .get_websocket("/register")
            .await
            .into_websocket()
            .await;

        Self { ws }
    }

    /// Receive the next broadcast
    pub async fn receive_message(&mut self) -> Message {
        self.ws.receive_json::<Message>().await
    }

    /// Receive the next raw frame
    pub async fn receive_frame(&mut self) -> WsMessage {
        self.ws.receive_message().await
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect `count` subscribers and wait until all are registered
pub async fn connect_subscribers(
    test_server: &TestServerWithState,
    count: usize,
) -> Vec<SubscriberClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(SubscriberClient::connect(test_server).await);
    }
    test_server.wait_for_subscribers(count).await;
    clients
}

/// POST `{"body": body}` to `/broadcast`
pub async fn publish(test_server: &TestServerWithState, body: &str) -> TestResponse {
    test_server
        .server
        .post("/broadcast")
        .json(&json!({ "body": body }))
        .await
}
