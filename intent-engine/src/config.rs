use crate::error::{OracleError, OracleResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "tinyllama";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_NUM_PREDICT: u32 = 128;

/// Text-completion backend
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OracleProvider {
    /// Local Ollama instance, `/api/generate` endpoint
    Ollama { api_url: String, model: String },
}

/// Oracle configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OracleConfig {
    pub provider: OracleProvider,
    /// Upper bound on a single completion call
    pub timeout_secs: u64,
    /// Maximum number of generated tokens
    pub num_predict: u32,
    pub temperature: f32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            provider: OracleProvider::Ollama {
                api_url: DEFAULT_OLLAMA_URL.to_string(),
                model: DEFAULT_MODEL.to_string(),
            },
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            num_predict: DEFAULT_NUM_PREDICT,
            temperature: 0.0,
        }
    }
}

impl OracleConfig {
    pub fn ollama(api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: OracleProvider::Ollama {
                api_url: api_url.into(),
                model: model.into(),
            },
            ..Self::default()
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_num_predict(mut self, num_predict: u32) -> Self {
        self.num_predict = num_predict;
        self
    }

    /// # Errors
    ///
    /// Returns [`OracleError::Config`] for an empty endpoint or model name,
    /// or a zero timeout.
    pub fn validate(&self) -> OracleResult<()> {
        match &self.provider {
            OracleProvider::Ollama { api_url, model } => {
                if api_url.trim().is_empty() {
                    return Err(OracleError::Config("Ollama URL cannot be empty".to_string()));
                }
                if model.trim().is_empty() {
                    return Err(OracleError::Config("Model name cannot be empty".to_string()));
                }
            }
        }
        if self.timeout_secs == 0 {
            return Err(OracleError::Config("Oracle timeout must be positive".to_string()));
        }
        Ok(())
    }
}
