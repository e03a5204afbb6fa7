//! Ordered-fallback lookup over loosely-typed JSON payloads.
//!
//! The call platform's payload shapes are informally specified and have
//! drifted across revisions, so field access never assumes a field exists.
//! Extraction is an explicit list of lookup paths tried in sequence.

use serde_json::Value;

/// Resolve a dot-separated path (e.g. `args.issue`) against a JSON document.
///
/// Returns `None` as soon as a segment is missing or an intermediate value
/// is not an object.
pub fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Try `paths` in order and return the first hit rendered as text.
///
/// A path hits when it resolves to a non-empty string; a present non-string
/// value is rendered via its JSON serialization. Nulls and empty strings
/// fall through to the next path.
pub fn first_text(doc: &Value, paths: &[&str]) -> Option<String> {
    for path in paths {
        match lookup(doc, path) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::String(_)) | Some(Value::Null) | None => {}
            Some(other) => return Some(other.to_string()),
        }
    }
    None
}

/// Read a single non-empty string field, without the serialization fallback
/// of [`first_text`].
pub fn text_field(doc: &Value, path: &str) -> Option<String> {
    match lookup(doc, path) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Read a single integer field.
pub fn int_field(doc: &Value, path: &str) -> Option<i64> {
    lookup(doc, path).and_then(Value::as_i64)
}
