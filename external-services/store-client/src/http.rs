//! reqwest implementations of the store traits

use crate::{ConfigStore, Result, SchemaStore, StoreError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for one document service
#[derive(Debug, Clone)]
pub struct StoreClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl StoreClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Shared plumbing of both services: `{base_url}/{app}` addressing
struct DocumentServiceClient {
    client: Client,
    base_url: String,
}

impl DocumentServiceClient {
    fn new(config: &StoreClientConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(StoreError::ConfigurationError(
                "Store base URL cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, app: &str) -> String {
        format!("{}/{}", self.base_url, app)
    }

    /// `Ok(None)` on 404, the parsed body on success
    async fn fetch(&self, app: &str) -> Result<Option<Value>> {
        let url = self.url(app);
        debug!(url = %url, "fetching document");

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response.text().await?;
                Ok(Some(serde_json::from_str(&body)?))
            }
            status => Err(StoreError::Status {
                app: app.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}

/// Values service client
pub struct HttpConfigStore {
    inner: DocumentServiceClient,
}

impl HttpConfigStore {
    /// # Errors
    ///
    /// Fails on an empty base URL or when the HTTP client cannot be built.
    pub fn new(config: &StoreClientConfig) -> Result<Self> {
        Ok(Self {
            inner: DocumentServiceClient::new(config)?,
        })
    }
}

#[async_trait]
impl ConfigStore for HttpConfigStore {
    async fn get(&self, app: &str) -> Result<Value> {
        self.inner
            .fetch(app)
            .await?
            .ok_or_else(|| StoreError::NotFound(app.to_string()))
    }

    async fn put(&self, app: &str, document: &Value) -> Result<()> {
        let url = self.inner.url(app);
        let response = self.inner.client.put(&url).json(document).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(app = %app, status = status.as_u16(), "values service refused write");
            return Err(StoreError::Status {
                app: app.to_string(),
                status: status.as_u16(),
            });
        }
        debug!(app = %app, "document written");
        Ok(())
    }
}

/// Schema service client
pub struct HttpSchemaStore {
    inner: DocumentServiceClient,
}

impl HttpSchemaStore {
    /// # Errors
    ///
    /// Fails on an empty base URL or when the HTTP client cannot be built.
    pub fn new(config: &StoreClientConfig) -> Result<Self> {
        Ok(Self {
            inner: DocumentServiceClient::new(config)?,
        })
    }
}

#[async_trait]
impl SchemaStore for HttpSchemaStore {
    async fn get(&self, app: &str) -> Result<Option<Value>> {
        self.inner.fetch(app).await
    }
}
