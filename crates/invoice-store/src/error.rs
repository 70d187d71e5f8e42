//! Error types for store access.

use thiserror::Error;

/// Errors returned by an [`InvoiceStore`](crate::InvoiceStore).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The request did not reach the backend or no response came back.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("store rejected request ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Backend error message, or the raw body when it has none.
        message: String,
    },

    /// The backend answered but the response could not be interpreted.
    #[error("unexpected store response: {0}")]
    InvalidResponse(String),

    /// The client could not be configured.
    #[error("invalid store configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
