//! Fetch error model.

use thiserror::Error;

/// Failure while fetching from the catalog API.
///
/// `Clone`able so screen state can hold on to the error it last saw.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport never produced a response (DNS, refused connection,
    /// mid-stream disconnect).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("api returned status {status}")]
    Api { status: u16, message: Option<String> },

    /// The response body was not the shape this client expects.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Human-readable message the server attached to a failed response, when
    /// it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}
