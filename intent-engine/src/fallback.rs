use crate::vocabulary::classify;
use config_engine::{first_integer, FieldUpdateMap};
use serde_json::Value;
use tracing::{debug, info};

/// Deterministic extraction used when the oracle cannot be trusted
///
/// Takes the first run of digits in `input` and assigns it to every field
/// of the first keyword class the input mentions. Input without digits, or
/// without a known keyword, yields an empty map.
pub fn fallback_updates(input: &str) -> FieldUpdateMap {
    let Some(number) = first_integer(input) else {
        info!("no numeric value in input, ignoring request");
        return FieldUpdateMap::new();
    };

    let Some(class) = classify(input) else {
        debug!(value = number, "number found but no field keyword matched");
        return FieldUpdateMap::new();
    };

    class
        .fields
        .iter()
        .map(|field| ((*field).to_string(), Value::from(number)))
        .collect()
}
