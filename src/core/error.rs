//! Error types for the explorer.
//!
//! Every failure is surfaced to the user through the toast sink, so the
//! `Display` output doubles as the message shown in the UI.

use thiserror::Error;

/// Errors raised by the file API, file reading, or input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    /// Request could not be sent (offline, CORS, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// Request took longer than the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Non-2xx response
    #[error("Server responded with HTTP {0}")]
    Http(u16),
    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
    /// User input rejected before any request was made
    #[error("{0}")]
    Validation(String),
    /// A selected file could not be read into memory
    #[error("Could not read {name}: {reason}")]
    FileRead { name: String, reason: String },
}

impl From<gloo_net::Error> for ExplorerError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            gloo_net::Error::JsError(e) => Self::Network(e.to_string()),
            gloo_net::Error::GlooError(msg) => Self::Network(msg),
        }
    }
}
