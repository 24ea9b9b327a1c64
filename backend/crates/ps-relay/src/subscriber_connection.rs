use crate::{Message, Result as RelayResult};

use async_trait::async_trait;

/// Outbound half of a subscriber's duplex connection.
///
/// Only the broadcast registry calls these, one at a time.
#[async_trait]
pub trait SubscriberConnection: Send {
    /// Write one message as a single frame
    async fn send_message(&mut self, message: &Message) -> RelayResult<()>;

    /// Close the connection. Later sends are expected to fail.
    async fn close(&mut self) -> RelayResult<()>;
}
