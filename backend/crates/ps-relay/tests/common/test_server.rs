#![allow(dead_code)]

use ps_relay::{AppState, Metrics, publish_handler, register_handler};

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use tokio::time::{Duration, timeout};

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

impl TestServerWithState {
    /// Wait until the registry has processed `count` registrations
    pub async fn wait_for_subscribers(&self, count: usize) {
        let mut subscribers = self.app_state.registry.watch_subscriber_count();
        timeout(Duration::from_secs(5), subscribers.wait_for(|n| *n >= count))
            .await
            .expect("Timed out waiting for registrations")
            .expect("Registry stopped publishing subscriber counts");
    }
}

/// Create a TestServer over a real HTTP transport (needed for WebSockets)
pub fn create_test_server() -> TestServerWithState {
    let app_state = AppState::spawn(Metrics::default());

    let router = Router::new()
        .route("/register", get(register_handler))
        .route("/broadcast", post(publish_handler))
        .with_state(app_state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}
