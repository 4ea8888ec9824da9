//! Ollama provider
//!
//! Sends a single non-streaming request to `/api/generate` and returns the
//! `response` field of the reply.

use crate::config::{OracleConfig, OracleProvider};
use crate::error::{OracleError, OracleResult};
use crate::providers::CompletionOracle;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

pub struct OllamaOracle {
    client: Client,
    api_url: String,
    model: String,
    temperature: f32,
    num_predict: u32,
}

impl OllamaOracle {
    /// # Errors
    ///
    /// Returns [`OracleError::Network`] when the HTTP client cannot be built.
    pub fn new(config: &OracleConfig) -> OracleResult<Self> {
        let OracleProvider::Ollama { api_url, model } = &config.provider;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.clone(),
            model: model.clone(),
            temperature: config.temperature,
            num_predict: config.num_predict,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionOracle for OllamaOracle {
    async fn complete(&self, prompt: &str) -> OracleResult<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: self.num_predict,
            },
        };

        debug!(model = %self.model, url = %self.api_url, "sending completion request");

        let response = self.client.post(&self.api_url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let generated: GenerateResponse = serde_json::from_str(&body)?;
        debug!(chars = generated.response.len(), "completion received");
        Ok(generated.response)
    }
}
