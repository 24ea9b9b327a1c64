use ps_relay::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - status plus the registry's current subscriber count
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "subscribers": state.registry.subscriber_count(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
