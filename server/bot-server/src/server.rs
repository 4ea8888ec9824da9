use anyhow::{Context, Result};
use intent_engine::{create_oracle, IntentExtractor};
use std::sync::Arc;
use std::time::Instant;
use store_client::{HttpConfigStore, HttpSchemaStore};

use crate::config::BotConfig;
use crate::orchestrator::RequestOrchestrator;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct BotServer {
    /// Runtime configuration
    pub config: Arc<BotConfig>,
    /// Message pipeline
    pub orchestrator: Arc<RequestOrchestrator>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl BotServer {
    /// Wire up the oracle and store clients described by `config`
    pub fn new(config: BotConfig) -> Result<Self> {
        let oracle = create_oracle(&config.oracle()).context("failed to create oracle client")?;
        let config_store = HttpConfigStore::new(&config.values_store())
            .context("failed to create values service client")?;
        let schema_store = HttpSchemaStore::new(&config.schema_store())
            .context("failed to create schema service client")?;

        let orchestrator = RequestOrchestrator::new(
            IntentExtractor::new(oracle),
            Arc::new(config_store),
            Arc::new(schema_store),
        );

        Ok(Self::with_components(config, orchestrator))
    }

    /// Build the state around an already assembled orchestrator
    pub fn with_components(config: BotConfig, orchestrator: RequestOrchestrator) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            started_at: Instant::now(),
        }
    }
}
