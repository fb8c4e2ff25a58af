//! Transform merging.
//!
//! Transform props (`x`, `rotate`, `scale`, ...) never overwrite each other.
//! Each one appends a single-key entry to the style object's `transform` list,
//! in call order.

use crate::value::{StyleObject, Value};

/// Canonical transform name for `key`: `x` → `translateX`, `y` → `translateY`.
/// Other keys are returned unchanged.
pub fn canonical_transform_name(key: &str) -> &str {
    match key {
        "x" => "translateX",
        "y" => "translateY",
        other => other,
    }
}

/// Append `{canonical(key): value}` to `style["transform"]`.
///
/// A missing `transform` starts an empty list; a non-list `transform` is wrapped
/// into a one-element list first.
pub fn merge_transform(style: &mut StyleObject, key: &str, value: Value) {
    let mut entry = serde_json::Map::with_capacity(1);
    entry.insert(canonical_transform_name(key).to_string(), value);
    let entry = Value::Object(entry);

    // Update in place so `transform` keeps its position among the keys.
    match style.get_mut("transform") {
        Some(Value::Array(list)) => list.push(entry),
        Some(single) => {
            let existing = single.take();
            *single = Value::Array(vec![existing, entry]);
        }
        None => {
            style.insert("transform".into(), Value::Array(vec![entry]));
        }
    }
}
