//! Schema gate deciding whether an updated document may be persisted

use crate::error::{ConfigError, Result};
use crate::ConfigValidator;
use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Why a document was refused by its schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Human-readable description of the first violation
    pub reason: String,
    /// JSON pointer to the offending location, `/` for the document root
    pub path: String,
}

/// Outcome of [`ValidationGate::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Safe to persist. `schema_checked` is `false` when no usable schema
    /// was available and validation was skipped.
    Accepted { schema_checked: bool },
    Rejected(Rejection),
}

impl GateDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, GateDecision::Accepted { .. })
    }
}

/// A compiled JSON Schema
pub struct CompiledSchema {
    inner: JSONSchema,
}

impl CompiledSchema {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSchema`] when `schema` is not a valid
    /// JSON Schema document.
    pub fn compile(schema: &Value) -> Result<Self> {
        let inner =
            JSONSchema::compile(schema).map_err(|e| ConfigError::InvalidSchema(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ConfigValidator for CompiledSchema {
    fn validate(&self, config: &Value) -> Result<()> {
        let Err(mut errors) = self.inner.validate(config) else {
            return Ok(());
        };

        match errors.next() {
            Some(error) => {
                let path = error.instance_path.to_string();
                Err(ConfigError::ValidationFailed {
                    message: error.to_string(),
                    path: if path.is_empty() { "/".to_string() } else { path },
                })
            }
            None => Ok(()),
        }
    }
}

/// The single point where persistence is allowed or refused
pub struct ValidationGate;

impl ValidationGate {
    /// Check `document` against `schema`
    ///
    /// A missing schema, or one that fails to compile, never blocks the
    /// update; it is logged and the document is accepted unchecked.
    pub fn check(document: &Value, schema: Option<&Value>) -> GateDecision {
        let Some(schema) = schema else {
            warn!("no schema available, skipping validation");
            return GateDecision::Accepted {
                schema_checked: false,
            };
        };

        let compiled = match CompiledSchema::compile(schema) {
            Ok(compiled) => compiled,
            Err(e) => {
                warn!(error = %e, "schema could not be compiled, skipping validation");
                return GateDecision::Accepted {
                    schema_checked: false,
                };
            }
        };

        match compiled.validate(document) {
            Ok(()) => {
                debug!("document passed schema validation");
                GateDecision::Accepted {
                    schema_checked: true,
                }
            }
            Err(ConfigError::ValidationFailed { message, path }) => {
                warn!(path = %path, reason = %message, "document rejected by schema");
                GateDecision::Rejected(Rejection {
                    reason: message,
                    path,
                })
            }
            Err(ConfigError::InvalidSchema(message)) => {
                warn!(error = %message, "schema unusable, skipping validation");
                GateDecision::Accepted {
                    schema_checked: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn replica_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "deployment": {
                    "type": "object",
                    "properties": {
                        "replicas": { "type": "integer", "minimum": 1, "maximum": 10 }
                    }
                }
            }
        })
    }

    #[test]
    fn test_valid_document_is_accepted_and_checked() {
        let document = json!({ "deployment": { "replicas": 3 } });
        assert_eq!(
            ValidationGate::check(&document, Some(&replica_schema())),
            GateDecision::Accepted {
                schema_checked: true
            }
        );
    }

    #[test]
    fn test_violation_is_rejected_with_pointer_path() {
        let document = json!({ "deployment": { "replicas": 50 } });

        let GateDecision::Rejected(rejection) =
            ValidationGate::check(&document, Some(&replica_schema()))
        else {
            panic!("expected rejection");
        };

        assert_eq!(rejection.path, "/deployment/replicas");
        assert!(rejection.reason.contains("50"));
    }

    #[test]
    fn test_root_violation_reports_slash() {
        let schema = json!({ "type": "object", "required": ["deployment"] });
        let GateDecision::Rejected(rejection) = ValidationGate::check(&json!({}), Some(&schema))
        else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.path, "/");
    }

    #[test]
    fn test_missing_schema_accepts_unchecked() {
        let decision = ValidationGate::check(&json!({ "anything": true }), None);
        assert_eq!(
            decision,
            GateDecision::Accepted {
                schema_checked: false
            }
        );
        assert!(decision.is_accepted());
    }

    #[test]
    fn test_broken_schema_accepts_unchecked() {
        let schema = json!({ "type": 12 });
        assert_eq!(
            ValidationGate::check(&json!({ "replicas": 1 }), Some(&schema)),
            GateDecision::Accepted {
                schema_checked: false
            }
        );
    }

    #[test]
    fn test_compiled_schema_as_validator() {
        let compiled = CompiledSchema::compile(&replica_schema()).unwrap();
        assert!(compiled.validate(&json!({ "deployment": { "replicas": 2 } })).is_ok());
        assert!(matches!(
            compiled.validate(&json!({ "deployment": { "replicas": "two" } })),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }
}
