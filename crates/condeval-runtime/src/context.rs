//! Record property resolution
//!
//! Resolves dotted property paths against a data record. Flat keys that
//! themselves contain dots take precedence over nested objects: for a path
//! `a.b`, a record with both the key `"a.b"` and a nested `{a: {b: ...}}`
//! resolves to the flat key.

use condeval_core::Value;
use std::collections::HashMap;

/// Read-only view over a single data record
#[derive(Debug, Clone, Copy)]
pub struct RecordContext<'a> {
    fields: &'a HashMap<String, Value>,
}

impl<'a> RecordContext<'a> {
    /// Create a context over a record's fields
    pub fn new(fields: &'a HashMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Resolve a dotted property path, longest matching prefix first.
    ///
    /// The full path is tried as a flat key, then progressively shorter
    /// prefixes; the first prefix that names an object is descended into
    /// with the remaining suffix, backtracking to shorter prefixes when the
    /// descent fails. Returns `None` when nothing matches.
    pub fn resolve(&self, path: &str) -> Option<&'a Value> {
        resolve_in(self.fields, path)
    }
}

fn resolve_in<'a>(fields: &'a HashMap<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(value) = fields.get(path) {
        return Some(value);
    }

    // Try prefixes from longest to shortest
    let mut cut = path.len();
    while let Some(dot) = path[..cut].rfind('.') {
        if let Some(Value::Object(sub)) = fields.get(&path[..dot]) {
            if let Some(value) = resolve_in(sub, &path[dot + 1..]) {
                return Some(value);
            }
        }
        cut = dot;
    }

    None
}
