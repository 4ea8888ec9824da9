//! Error types for the store clients

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Store returned HTTP {status} for {app}")]
    Status { app: String, status: u16 },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timeout error: {0}")]
    TimeoutError(String),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StoreError::TimeoutError(err.to_string())
        } else {
            StoreError::NetworkError(err.to_string())
        }
    }
}
