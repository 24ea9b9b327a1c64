use std::fmt;
use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::Extensions;

const UNKNOWN_PEER: &str = "unknown";

/// Diagnostic identity of a subscriber, derived from its remote address.
///
/// Not unique: a client reconnecting from the same port gets the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(String);

impl SubscriberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Id for a peer whose address the transport did not expose
    pub fn unknown() -> Self {
        Self(String::from(UNKNOWN_PEER))
    }

    /// Read the peer address that `into_make_service_with_connect_info` stores
    /// in the request extensions.
    pub fn from_extensions(extensions: &Extensions) -> Self {
        extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| Self::from(*addr))
            .unwrap_or_else(Self::unknown)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<SocketAddr> for SubscriberId {
    fn from(addr: SocketAddr) -> Self {
        Self(addr.to_string())
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
