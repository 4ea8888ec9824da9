use crate::fallback::fallback_updates;
use crate::parsing::{parse_response, sanitize_response};
use crate::prompt::build_extraction_prompt;
use crate::providers::CompletionOracle;
use crate::vocabulary::ApplicationName;
use config_engine::FieldUpdateMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns free text into a flat field update map
///
/// Never fails: when the oracle is unreachable or answers with something
/// that is not a non-empty object, the deterministic keyword fallback is
/// used instead.
#[derive(Clone)]
pub struct IntentExtractor {
    oracle: Arc<dyn CompletionOracle>,
}

impl IntentExtractor {
    pub fn new(oracle: Arc<dyn CompletionOracle>) -> Self {
        Self { oracle }
    }

    pub async fn extract(&self, user_input: &str, app: &ApplicationName) -> FieldUpdateMap {
        let prompt = build_extraction_prompt(user_input, app);

        let raw = match self.oracle.complete(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(app = %app, error = %e, "oracle unavailable, using keyword fallback");
                return fallback_updates(user_input);
            }
        };

        let cleaned = sanitize_response(&raw);
        match parse_response(&cleaned) {
            Some(Value::Object(entries)) => {
                let updates = FieldUpdateMap::from(entries);
                if updates.is_empty() {
                    warn!(app = %app, "oracle returned no usable fields, using keyword fallback");
                    return fallback_updates(user_input);
                }
                debug!(app = %app, fields = updates.len(), "oracle extraction succeeded");
                updates
            }
            Some(_) => {
                warn!(app = %app, "oracle output is not an object, using keyword fallback");
                fallback_updates(user_input)
            }
            None => {
                warn!(app = %app, response = %cleaned, "oracle output is not parsable, using keyword fallback");
                fallback_updates(user_input)
            }
        }
    }
}
