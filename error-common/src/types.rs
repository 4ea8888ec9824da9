use thiserror::Error;

/// Process-level error for the confbot binaries
#[derive(Error, Debug)]
pub enum ConfbotError {
    /// Network communication errors (bind failures, unreachable peers)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// HTTP server runtime errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration loading errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Document storage errors
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConfbotError {
    /// Short machine-readable category, used as a structured log field
    pub fn error_type(&self) -> &'static str {
        match self {
            ConfbotError::NetworkError(_) => "network_error",
            ConfbotError::ServerError(_) => "server_error",
            ConfbotError::ConfigError(_) => "configuration_error",
            ConfbotError::StorageError(_) => "storage_error",
            ConfbotError::InternalError(_) => "internal_error",
            ConfbotError::Other(_) => "other",
        }
    }
}

/// Result type alias for confbot operations
pub type Result<T> = std::result::Result<T, ConfbotError>;

/// Async logging function for errors
pub async fn log_error(context: &str, error: &ConfbotError) {
    tracing::error!(
        context = context,
        error_type = error.error_type(),
        error = %error,
        "confbot error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_category() {
        let err = ConfbotError::NetworkError("bind 0.0.0.0:5003 failed".to_string());
        assert_eq!(err.to_string(), "Network error: bind 0.0.0.0:5003 failed");
        assert_eq!(err.error_type(), "network_error");
    }

    #[test]
    fn test_anyhow_conversion_is_transparent() {
        let err: ConfbotError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.error_type(), "other");
    }

    #[tokio::test]
    async fn test_log_error_does_not_panic_without_subscriber() {
        let err = ConfbotError::ConfigError("missing listen address".to_string());
        log_error("startup", &err).await;
    }
}
