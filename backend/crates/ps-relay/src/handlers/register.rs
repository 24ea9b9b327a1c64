use crate::{AppState, RelayError, Subscriber, SubscriberId, WebSocketConnection};

use std::panic::Location;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::Extensions,
    response::Response,
};
use error_location::ErrorLocation;
use log::{debug, error};

/// `GET /register` - upgrade to a WebSocket and register the new subscriber.
///
/// A request that cannot be upgraded gets a 500 and registers nothing.
pub async fn register_handler(
    State(state): State<AppState>,
    extensions: Extensions,
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Result<Response, RelayError> {
    let ws = upgrade.map_err(|rejection| {
        state.metrics.upgrade_failed();
        RelayError::UpgradeFailure {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let subscriber_id = SubscriberId::from_extensions(&extensions);
    debug!("WebSocket upgrade request from {subscriber_id}");

    let failed_id = subscriber_id.clone();
    let failed_metrics = state.metrics.clone();

    Ok(ws
        .on_failed_upgrade(move |e| {
            error!("error upgrading connection for {failed_id}: {e}");
            failed_metrics.upgrade_failed();
        })
        .on_upgrade(move |socket| register_socket(socket, subscriber_id, state)))
}

/// Hand the upgraded socket to the registry. Runs on the upgraded
/// connection's own task, so the HTTP side is already finished.
async fn register_socket(socket: WebSocket, subscriber_id: SubscriberId, state: AppState) {
    let connection = WebSocketConnection::new(socket);
    let subscriber = Subscriber::new(subscriber_id.clone(), Box::new(connection), &state.registry);

    if let Err(e) = state.registry.register(subscriber).await {
        error!("Failed to register subscriber {subscriber_id}: {e}");
    }
}
