//! Configuration document engine for confbot
//!
//! This crate owns everything that happens to an application's
//! configuration document between "fetched from the values store" and
//! "written back":
//!
//! - **Traversal**: a depth-first visitor over the document tree
//!   ([`walk_mut`], [`DocumentVisitor`])
//! - **Updates**: applying a flat [`FieldUpdateMap`] onto every matching key
//!   of a nested document, with numeric coercion ([`apply_updates`])
//! - **Validation**: the schema gate that decides whether an updated
//!   document may be persisted ([`ValidationGate`])
//!
//! # Example
//!
//! ```rust
//! use config_engine::{apply_updates, FieldUpdateMap, GateDecision, ValidationGate};
//! use serde_json::json;
//!
//! let mut document = json!({
//!     "deployment": { "replicas": 2, "resources": { "limitMiB": 512 } }
//! });
//! let updates: FieldUpdateMap = [("limitMiB".to_string(), json!("1024mb"))]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(apply_updates(&mut document, &updates), 1);
//! assert_eq!(document["deployment"]["resources"]["limitMiB"], json!(1024));
//!
//! let schema = json!({
//!     "type": "object",
//!     "required": ["deployment"]
//! });
//! assert!(matches!(
//!     ValidationGate::check(&document, Some(&schema)),
//!     GateDecision::Accepted { schema_checked: true }
//! ));
//! ```

pub mod document;
pub mod error;
pub mod updater;
pub mod validation;

pub use document::*;
pub use error::*;
pub use updater::*;
pub use validation::*;

/// Configuration validation and schema enforcement
pub trait ConfigValidator {
    /// Check a whole configuration document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationFailed`] describing the first
    /// violation found.
    fn validate(&self, config: &serde_json::Value) -> crate::error::Result<()>;
}
