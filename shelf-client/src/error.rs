//! Client error types

use shelf_core::SourceError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("catalog returned status {0}")]
    Status(u16),

    /// Response body did not decode as a product page
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for SourceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => SourceError::Transport(e.to_string()),
            ClientError::Status(code) => SourceError::Status(code),
            ClientError::Decode(e) => SourceError::Decode(e.to_string()),
        }
    }
}
