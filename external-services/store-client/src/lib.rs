//! # confbot store clients
//!
//! The bot never touches configuration files directly. It talks to two
//! small HTTP services:
//!
//! - the **values service**, a read/write mapping from application name to
//!   its configuration document ([`ConfigStore`])
//! - the **schema service**, a read-only mapping from application name to
//!   a JSON Schema ([`SchemaStore`])
//!
//! Both are addressed as `GET {base_url}/{app}`; values are written with
//! `PUT {base_url}/{app}`.

pub mod error;
pub mod http;

pub use error::*;
pub use http::{HttpConfigStore, HttpSchemaStore, StoreClientConfig};

use async_trait::async_trait;
use serde_json::Value;

/// Result type for store clients
pub type Result<T> = std::result::Result<T, StoreError>;

/// Read/write access to configuration documents
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetch the current document for `app`
    async fn get(&self, app: &str) -> Result<Value>;

    /// Replace the document for `app`
    async fn put(&self, app: &str, document: &Value) -> Result<()>;
}

/// Read-only access to JSON Schemas
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Fetch the schema for `app`; `Ok(None)` when the store has none
    async fn get(&self, app: &str) -> Result<Option<Value>>;
}
