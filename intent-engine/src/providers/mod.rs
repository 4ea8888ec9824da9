pub mod ollama;

use crate::config::{OracleConfig, OracleProvider};
use crate::error::OracleResult;
use async_trait::async_trait;
use std::sync::Arc;

pub use ollama::OllamaOracle;

/// Opaque text-completion capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    /// Complete `prompt`, returning the raw generated text
    async fn complete(&self, prompt: &str) -> OracleResult<String>;
}

/// Create an oracle instance based on configuration
///
/// # Errors
///
/// Returns an error when the configuration is invalid or the HTTP client
/// cannot be built.
pub fn create_oracle(config: &OracleConfig) -> OracleResult<Arc<dyn CompletionOracle>> {
    config.validate()?;
    match config.provider {
        OracleProvider::Ollama { .. } => Ok(Arc::new(OllamaOracle::new(config)?)),
    }
}
