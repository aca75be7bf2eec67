use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure kinds for a trigger call. Callers branch on the kind, not on
/// message text: transport failures mean "server unreachable", while an
/// application failure means the server answered and said no.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure: connection refused, timeout, DNS.
    #[error("Cannot connect to server: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered but reported the command failed.
    #[error("Server reported failure: {message} {location}")]
    Application {
        message: String,
        location: ErrorLocation,
    },

    /// The response body did not match the expected shape.
    #[error("Unexpected response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an application error with location
    #[track_caller]
    pub fn application<S: Into<String>>(message: S) -> Self {
        ClientError::Application {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the server itself was unreachable rather than unhappy.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
