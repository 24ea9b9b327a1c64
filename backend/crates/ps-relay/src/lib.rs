pub mod app_state;
pub mod broadcast_registry;
pub mod error;
pub mod handlers;
pub mod message;
pub mod metrics;
pub mod registry_handle;
pub mod subscriber;
pub mod subscriber_connection;
pub mod subscriber_id;
pub mod web_socket_connection;

pub use app_state::AppState;
pub use broadcast_registry::BroadcastRegistry;
pub use error::{RelayError, Result};
pub use handlers::publish::publish_handler;
pub use handlers::register::register_handler;
pub use message::Message;
pub use crate::metrics::Metrics;
pub use registry_handle::{RegistryHandle, WeakRegistryHandle};
pub use subscriber::Subscriber;
pub use subscriber_connection::SubscriberConnection;
pub use subscriber_id::SubscriberId;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;
