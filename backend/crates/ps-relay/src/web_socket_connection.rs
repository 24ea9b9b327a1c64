use crate::{Message, RelayError, Result as RelayResult, SubscriberConnection};

use std::panic::Location;

use async_trait::async_trait;
use axum::extract::ws::{Message as WsMessage, WebSocket};
use error_location::ErrorLocation;
use futures::SinkExt;

/// A subscriber connection backed by an upgraded WebSocket.
///
/// The read half is never polled; subscribers only receive.
pub struct WebSocketConnection {
    socket: WebSocket,
}

impl WebSocketConnection {
    pub fn new(socket: WebSocket) -> Self {
        Self { socket }
    }
}

#[async_trait]
impl SubscriberConnection for WebSocketConnection {
    async fn send_message(&mut self, message: &Message) -> RelayResult<()> {
        let text = message.to_json()?;

        self.socket
            .send(WsMessage::Text(text.into()))
            .await
            .map_err(|e| RelayError::DeliveryFailure {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn close(&mut self) -> RelayResult<()> {
        SinkExt::close(&mut self.socket)
            .await
            .map_err(|e| RelayError::CloseFailure {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
