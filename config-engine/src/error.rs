use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration validation failed at {path}: {message}")]
    ValidationFailed { message: String, path: String },

    #[error("Configuration schema is invalid: {0}")]
    InvalidSchema(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
