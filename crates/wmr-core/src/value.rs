//! # JSON Value Helpers
//!
//! Total accessors over `serde_json::Value`. Payloads reach warning
//! generation only partially schema-checked, so every helper answers
//! "absent" for a missing or wrongly-typed node instead of failing.

use serde_json::Value;

/// Resolve a dotted path against `value`.
///
/// Object segments are looked up by key; numeric segments index into
/// arrays. Returns `None` as soon as a segment does not resolve.
///
/// ```
/// use serde_json::json;
/// use wmr_core::value::lookup;
///
/// let payload = json!({"wasteItems": [{"disposalOrRecoveryCodes": [{"code": "R1"}]}]});
/// let code = lookup(&payload, "wasteItems.0.disposalOrRecoveryCodes.0.code");
/// assert_eq!(code, Some(&json!("R1")));
/// ```
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    path.split('.').try_fold(value, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Whether a field counts as blank: absent, `null`, or the empty string.
///
/// Whitespace-only strings are NOT blank; normalisation belongs upstream.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Convenience for `lookup` followed by `is_blank`.
pub fn is_blank_at(value: &Value, path: &str) -> bool {
    is_blank(lookup(value, path))
}

/// The array at `path`, if the node exists and is an array.
pub fn array_at<'a>(value: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    lookup(value, path).and_then(Value::as_array)
}

/// The string at `path`, if the node exists and is a string.
pub fn str_at<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    lookup(value, path).and_then(Value::as_str)
}

/// The boolean at `path`, if the node exists and is a boolean.
pub fn bool_at(value: &Value, path: &str) -> Option<bool> {
    lookup(value, path).and_then(Value::as_bool)
}

/// Whether the node at `path` is a number greater than or equal to zero.
pub fn is_non_negative_number_at(value: &Value, path: &str) -> bool {
    lookup(value, path)
        .and_then(Value::as_f64)
        .is_some_and(|n| n >= 0.0)
}
