//! Applying flat field updates onto nested configuration documents

use crate::document::{walk_mut, DocumentVisitor};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

lazy_static! {
    #[allow(clippy::unwrap_used)]
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Flat mapping from canonical field name to its new raw value
///
/// Only scalar values are kept. A container value would be walked again
/// after being written into the document and could match its own key
/// forever, so objects and sequences are dropped on insertion, including
/// when the map is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct FieldUpdateMap(Map<String, Value>);

impl FieldUpdateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field update, returning `false` if the value was not a scalar
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> bool {
        let field = field.into();
        let value = value.into();
        if value.is_object() || value.is_array() {
            debug!(field = %field, "dropping non-scalar field update");
            return false;
        }
        self.0.insert(field, value);
        true
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for FieldUpdateMap {
    fn from(entries: Map<String, Value>) -> Self {
        entries.into_iter().collect()
    }
}

impl FromIterator<(String, Value)> for FieldUpdateMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut updates = Self::new();
        for (field, value) in iter {
            updates.insert(field, value);
        }
        updates
    }
}

impl<'a> IntoIterator for &'a FieldUpdateMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// First run of ASCII digits in `text`, if any
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|m| m.as_str())
}

/// Integer value of the first run of ASCII digits in `text`
///
/// Returns `None` when there are no digits or the run does not fit in an
/// `i64`.
pub fn first_integer(text: &str) -> Option<i64> {
    first_digit_run(text).and_then(|digits| digits.parse().ok())
}

fn is_ascii_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Best-effort integer conversion; `None` means "keep the value as it is"
fn force_integer(value: &Value) -> Option<Value> {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => None,
        Value::Number(number) => number
            .as_f64()
            .filter(|f| f.is_finite() && f.abs() < 9.2e18)
            .map(|f| Value::from(f.trunc() as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok().map(Value::from),
        Value::Bool(flag) => Some(Value::from(i64::from(*flag))),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Compute the value written in place of `original`
///
/// Strings carrying stray units ("1024mb") are reduced to their first digit
/// run. Fields that held a number keep holding an integer.
///
/// A float written over a non-numeric field is kept as a float, so applying
/// the same update a second time truncates it. Repeated application is only
/// stable for integer and string replacements.
pub fn coerce_replacement(original: &Value, replacement: &Value) -> Value {
    let mut candidate = replacement.clone();

    if let Value::String(text) = replacement {
        if !is_ascii_digits(text) {
            if let Some(number) = first_integer(text) {
                candidate = Value::from(number);
            }
        }
    }

    if original.is_number() {
        if let Some(forced) = force_integer(&candidate) {
            candidate = forced;
        }
    }

    candidate
}

/// Visitor replacing every entry whose key appears in the update map
pub struct TreeUpdater<'a> {
    updates: &'a FieldUpdateMap,
    applied: usize,
}

impl<'a> TreeUpdater<'a> {
    pub fn new(updates: &'a FieldUpdateMap) -> Self {
        Self {
            updates,
            applied: 0,
        }
    }

    /// Number of entries replaced so far
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl DocumentVisitor for TreeUpdater<'_> {
    fn visit_entry(&mut self, key: &str, value: &mut Value) {
        let Some(replacement) = self.updates.get(key) else {
            return;
        };

        let coerced = coerce_replacement(value, replacement);
        info!(field = %key, value = %coerced, "updated field");
        *value = coerced;
        self.applied += 1;
    }
}

/// Apply `updates` to every matching key anywhere in `document`
///
/// Returns how many entries were replaced. Keys missing from the document
/// are never created.
pub fn apply_updates(document: &mut Value, updates: &FieldUpdateMap) -> usize {
    if updates.is_empty() {
        return 0;
    }

    let mut updater = TreeUpdater::new(updates);
    walk_mut(document, &mut updater);
    updater.applied()
}
