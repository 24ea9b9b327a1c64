use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Connection upgrade failed: {message} {location}")]
    UpgradeFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Delivery failed: {reason} {location}")]
    DeliveryFailure {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Closing connection failed: {reason} {location}")]
    CloseFailure {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Message serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Broadcast registry is no longer running {location}")]
    RegistryUnavailable { location: ErrorLocation },
}

impl RelayError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn delivery_failure<S: Into<String>>(reason: S) -> Self {
        Self::DeliveryFailure {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn registry_unavailable() -> Self {
        Self::RegistryUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::UpgradeFailure { .. }
            | Self::DeliveryFailure { .. }
            | Self::CloseFailure { .. }
            | Self::Serialization { .. }
            | Self::RegistryUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            Self::BadRequest { message, .. } => {
                log::warn!("Rejected publish request: {message}");
                message
            }
            Self::UpgradeFailure { ref message, .. } => {
                log::error!("Error upgrading connection: {message}");
                String::from("failed to upgrade connection")
            }
            Self::RegistryUnavailable { .. } => {
                log::error!("{self}");
                String::from("broadcast registry unavailable")
            }
            other => {
                log::error!("{other}");
                String::from("internal server error")
            }
        };

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for RelayError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
