//! Shadow normalization.
//!
//! Authors may give a shadow color with its own alpha (`rgba(...)`, `#rrggbbaa`)
//! and leave offset/radius unset. Platforms want one consistent set of discrete
//! fields, so before a style object is emitted:
//!
//! - a missing `shadowOffset` becomes `{width: 0, height: 0}`;
//! - a missing `shadowRadius` becomes `0`;
//! - an alpha carried in `shadowColor` moves to `shadowOpacity` (unless the
//!   author set `shadowOpacity` explicitly) and the color becomes opaque.
//!
//! The fix-up runs in place and is idempotent.

use crate::value::{json, StyleObject, Value};

/// Normalize shadow fields of `style` in place. No-op without `shadowColor`.
pub fn fix_shadow(style: &mut StyleObject) {
    let Some(color) = style.get("shadowColor").and_then(Value::as_str) else {
        return;
    };

    let split = split_alpha(color);

    if !style.contains_key("shadowOffset") {
        style.insert("shadowOffset".into(), json!({"width": 0, "height": 0}));
    }
    if !style.contains_key("shadowRadius") {
        style.insert("shadowRadius".into(), json!(0));
    }

    if let Some((opaque, alpha)) = split {
        style.insert("shadowColor".into(), Value::String(opaque));
        if !style.contains_key("shadowOpacity") {
            style.insert("shadowOpacity".into(), json!(alpha));
        }
    }
}

/// Split a color with an alpha channel into `(opaque color, alpha)`.
///
/// Recognizes `rgba(r, g, b, a)` and 8-digit hex `#rrggbbaa`. Returns `None` for
/// anything else, including colors that are already opaque.
fn split_alpha(color: &str) -> Option<(String, f64)> {
    let trimmed = color.trim();

    if let Some(inner) = trimmed
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return None;
        }
        let alpha: f64 = parts[3].parse().ok()?;
        return Some((
            format!("rgb({}, {}, {})", parts[0], parts[1], parts[2]),
            alpha,
        ));
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() == 8 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            let alpha = u8::from_str_radix(&hex[6..8], 16).ok()?;
            let alpha = (f64::from(alpha) / 255.0 * 100.0).round() / 100.0;
            return Some((format!("#{}", &hex[..6]), alpha));
        }
    }

    None
}
