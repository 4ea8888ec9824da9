//! Depth-first traversal of configuration documents
//!
//! A configuration document is a `serde_json::Value`: objects, sequences and
//! scalars. Visitors only ever see object entries, because keys are the only
//! thing field updates can match on; sequences are transparent containers.

use serde_json::Value;

/// Callback for every `key: value` entry of every object in a document
pub trait DocumentVisitor {
    /// Called before the walker descends into `value`, so anything the
    /// visitor writes into `value` is walked as well.
    fn visit_entry(&mut self, key: &str, value: &mut Value);
}

/// Walk `node` depth-first, handing every object entry to `visitor`
pub fn walk_mut<V>(node: &mut Value, visitor: &mut V)
where
    V: DocumentVisitor + ?Sized,
{
    match node {
        Value::Object(entries) => {
            for (key, child) in entries.iter_mut() {
                visitor.visit_entry(key, child);
                walk_mut(child, visitor);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                walk_mut(item, visitor);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}
