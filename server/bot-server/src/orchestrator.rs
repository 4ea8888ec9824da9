//! Per-request pipeline: resolve the application, fetch its document,
//! extract the intent, apply it, validate, persist.

use config_engine::{apply_updates, GateDecision, Rejection, ValidationGate};
use intent_engine::{resolve_application, ApplicationName, IntentExtractor};
use serde_json::Value;
use std::sync::Arc;
use store_client::{ConfigStore, SchemaStore, StoreError};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("No known application mentioned in input")]
    AppNotResolved,

    #[error("Values service unavailable for {app}: {source}")]
    UpstreamUnavailable {
        app: String,
        #[source]
        source: StoreError,
    },
}

/// What happened to one instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing actionable in the input; the stored document is echoed back
    Unchanged {
        app: ApplicationName,
        document: Value,
    },
    /// Updates applied and accepted. `persisted` is `false` when the write
    /// back to the values service failed.
    Updated {
        app: ApplicationName,
        document: Value,
        applied: usize,
        persisted: bool,
    },
    /// The schema refused the updated document; nothing was written
    Rejected {
        app: ApplicationName,
        rejection: Rejection,
        document: Value,
    },
}

impl Outcome {
    pub fn document(&self) -> &Value {
        match self {
            Outcome::Unchanged { document, .. }
            | Outcome::Updated { document, .. }
            | Outcome::Rejected { document, .. } => document,
        }
    }
}

pub struct RequestOrchestrator {
    extractor: IntentExtractor,
    config_store: Arc<dyn ConfigStore>,
    schema_store: Arc<dyn SchemaStore>,
}

impl RequestOrchestrator {
    pub fn new(
        extractor: IntentExtractor,
        config_store: Arc<dyn ConfigStore>,
        schema_store: Arc<dyn SchemaStore>,
    ) -> Self {
        Self {
            extractor,
            config_store,
            schema_store,
        }
    }

    /// Run one instruction through the whole pipeline
    ///
    /// # Errors
    ///
    /// Fails before anything is mutated when no application can be
    /// resolved or its current document cannot be fetched.
    pub async fn handle(&self, input: &str) -> Result<Outcome, OrchestratorError> {
        let app = resolve_application(input).ok_or(OrchestratorError::AppNotResolved)?;
        info!(app = %app, "resolved application");

        let mut document = self.config_store.get(app.as_str()).await.map_err(|source| {
            error!(app = %app, error = %source, "failed to fetch current values");
            OrchestratorError::UpstreamUnavailable {
                app: app.to_string(),
                source,
            }
        })?;

        let updates = self.extractor.extract(input, &app).await;
        if updates.is_empty() {
            info!(app = %app, "no actionable updates in input, returning current values");
            return Ok(Outcome::Unchanged { app, document });
        }

        let applied = apply_updates(&mut document, &updates);
        if applied == 0 {
            info!(app = %app, fields = updates.len(), "no matching fields found");
            return Ok(Outcome::Unchanged { app, document });
        }
        info!(app = %app, applied, "applied updates in memory");

        let schema = self.fetch_schema(&app).await;
        match ValidationGate::check(&document, schema.as_ref()) {
            GateDecision::Rejected(rejection) => {
                warn!(app = %app, path = %rejection.path, "update rejected, values not saved");
                Ok(Outcome::Rejected {
                    app,
                    rejection,
                    document,
                })
            }
            GateDecision::Accepted { schema_checked } => {
                info!(app = %app, schema_checked, "validation passed");
                let persisted = match self.config_store.put(app.as_str(), &document).await {
                    Ok(()) => true,
                    Err(e) => {
                        error!(app = %app, error = %e, "failed to persist updated values");
                        false
                    }
                };
                Ok(Outcome::Updated {
                    app,
                    document,
                    applied,
                    persisted,
                })
            }
        }
    }

    async fn fetch_schema(&self, app: &ApplicationName) -> Option<Value> {
        match self.schema_store.get(app.as_str()).await {
            Ok(Some(schema)) => Some(schema),
            Ok(None) => {
                warn!(app = %app, "schema not found, skipping validation");
                None
            }
            Err(e) => {
                warn!(app = %app, error = %e, "schema service unavailable, skipping validation");
                None
            }
        }
    }
}
