//! Prop and style value model.
//!
//! Props arrive as a flat, ordered bag of JSON-like values. Resolved styles use
//! the same representation so they can be handed to a renderer untouched.
//! Both maps preserve insertion order (`serde_json` is built with
//! `preserve_order`), which the splitter relies on for declaration order.

pub use serde_json::{json, Value};

/// An ordered bag of component props: key to arbitrary value.
pub type PropBag = serde_json::Map<String, Value>;

/// A resolved style object: style property name to value.
///
/// The `transform` property, when present, always holds an array of
/// single-key objects such as `[{"translateX": 10}, {"rotate": "5deg"}]`.
pub type StyleObject = serde_json::Map<String, Value>;

/// Returns `true` if `value` is falsy: `null`, `false`, zero, or the empty string.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Returns `true` if `value` is truthy. Inverse of [`is_falsy`].
pub fn is_truthy(value: &Value) -> bool {
    !is_falsy(value)
}

/// Render a value as a lookup key: `"true"`, `"false"`, `"10"`, `"large"`.
///
/// Strings are used verbatim (no quotes). Used to match variant entries.
pub fn value_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".into(),
        other => other.to_string(),
    }
}
