use crate::health;

use ps_relay::AppState;

use axum::{
    Router,
    routing::{any, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Subscriber upgrade endpoint, every method reaches the upgrade check
        .route("/register", any(ps_relay::register_handler))
        // Publish endpoint
        .route("/broadcast", post(ps_relay::publish_handler))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
