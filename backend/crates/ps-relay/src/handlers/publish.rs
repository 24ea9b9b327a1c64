use crate::{AppState, Message, RelayError};

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use log::debug;

/// `POST /broadcast` - parse `{"body": "..."}` and hand it to the registry.
///
/// Returns 200 once the registry has accepted the event, before fan-out
/// completes. Unreadable or malformed bodies get a 400 and nothing is
/// broadcast.
pub async fn publish_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, RelayError> {
    let message = body
        .map_err(|rejection| {
            RelayError::bad_request(format!(
                "error reading request body: {}",
                rejection.body_text()
            ))
        })
        .and_then(|bytes| Message::from_json_slice(&bytes))
        .inspect_err(|_| state.metrics.publish_rejected())?;

    debug!("Publishing message ({} bytes)", message.body().len());

    state.registry.broadcast(message).await?;

    Ok(StatusCode::OK)
}
