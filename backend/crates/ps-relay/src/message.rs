use crate::{RelayError, Result as RelayResult};

use serde::{Deserialize, Serialize};

/// A message fanned out to every registered subscriber.
///
/// Wire shape in both directions: `{"body": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    body: String,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse a publish request body.
    ///
    /// The body must be a JSON object. A missing `body` field reads as empty
    /// text, a non-string one is rejected, unknown fields are ignored.
    #[track_caller]
    pub fn from_json_slice(data: &[u8]) -> RelayResult<Self> {
        serde_json::from_slice(data)
            .map_err(|e| RelayError::bad_request(format!("error unmarshaling request body: {e}")))
    }

    pub fn to_json(&self) -> RelayResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
