//! Atomic CSS generation.
//!
//! Turns a resolved style object into one class per property/value pair. The
//! class identifier is derived from the declaration text only, so the same
//! declaration produced by any component maps to the same class.

use xxhash_rust::xxh3::xxh3_64;

use crate::value::{StyleObject, Value};

/// One atomic class: a single CSS declaration and the rule defining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicStyle {
    /// Style property name as authored (camelCase), e.g. `backgroundColor`.
    pub property: String,
    /// Class name, e.g. `_backgroundColor-9c1f2e3d4c5b6a70`.
    pub identifier: String,
    /// CSS value text, e.g. `10px`.
    pub value: String,
    /// Full rule text, e.g. `._padding-9c1f2e3d4c5b6a70{padding:10px;}`.
    pub rule: String,
}

impl AtomicStyle {
    /// Build an atomic style for `property: value`.
    pub fn new(property: &str, value: String) -> Self {
        let css_property = kebab_case(property);
        let hash = xxh3_64(format!("{css_property}:{value}").as_bytes());
        let identifier = format!("_{property}-{hash:x}");
        let rule = format!(".{identifier}{{{css_property}:{value};}}");
        Self {
            property: property.to_string(),
            identifier,
            value,
            rule,
        }
    }

    /// The declaration text, e.g. `padding:10px`.
    pub fn declaration(&self) -> String {
        format!("{}:{}", kebab_case(&self.property), self.value)
    }
}

/// Converts a style object into atomic classes.
pub trait AtomicGenerator: Send + Sync {
    /// One entry per emitted declaration, in style-object order.
    fn generate(&self, style: &StyleObject) -> Vec<AtomicStyle>;
}

/// The built-in generator.
///
/// - `null` values and native-only properties are skipped;
/// - numbers get `px` unless the property is unitless;
/// - the `transform` list becomes one `transform` declaration;
/// - shadow fields fold into one trailing `box-shadow` declaration.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicCss;

impl AtomicGenerator for AtomicCss {
    fn generate(&self, style: &StyleObject) -> Vec<AtomicStyle> {
        let mut out = Vec::with_capacity(style.len());

        for (property, value) in style {
            if value.is_null() || NATIVE_ONLY.contains(&property.as_str()) {
                continue;
            }
            if SHADOW_KEYS.contains(&property.as_str()) {
                continue;
            }
            let css_value = if property == "transform" {
                transform_value(value)
            } else {
                css_value(property, value)
            };
            match css_value {
                Some(text) => out.push(AtomicStyle::new(property, text)),
                None => tracing::trace!(property = %property, "skipping non-css style value"),
            }
        }

        if let Some(shadow) = box_shadow(style) {
            out.push(AtomicStyle::new("boxShadow", shadow));
        }

        out
    }
}

/// Properties whose numeric values carry no unit.
const UNITLESS: &[&str] = &[
    "opacity",
    "flex",
    "flexGrow",
    "flexShrink",
    "zIndex",
    "fontWeight",
    "aspectRatio",
    "order",
];

/// Properties with no web counterpart.
const NATIVE_ONLY: &[&str] = &["elevation", "includeFontPadding", "textAlignVertical"];

const SHADOW_KEYS: &[&str] = &["shadowColor", "shadowOffset", "shadowOpacity", "shadowRadius"];

/// `backgroundColor` → `background-color`.
pub fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// CSS text for a plain property value. `None` for objects.
fn css_value(property: &str, value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(if UNITLESS.contains(&property) {
            n.to_string()
        } else {
            format!("{n}px")
        }),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| css_value(property, item))
                .collect();
            Some(parts.join(" "))
        }
    }
}

/// `[{"translateX": 10}, {"rotate": "5deg"}]` → `translateX(10px) rotate(5deg)`.
fn transform_value(value: &Value) -> Option<String> {
    let entries = match value {
        Value::Array(entries) => entries.as_slice(),
        single @ Value::Object(_) => std::slice::from_ref(single),
        _ => return None,
    };

    let parts: Vec<String> = entries
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|entry| entry.iter())
        .map(|(name, arg)| format!("{name}({})", transform_arg(name, arg)))
        .collect();

    (!parts.is_empty()).then(|| parts.join(" "))
}

fn transform_arg(name: &str, arg: &Value) -> String {
    match arg {
        Value::Number(n) if name.starts_with("translate") || name == "perspective" => {
            format!("{n}px")
        }
        Value::Number(n) if name.starts_with("rotate") || name.starts_with("skew") => {
            format!("{n}deg")
        }
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| transform_arg(name, item))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Fold the shadow fields into `box-shadow` text, if `shadowColor` is set.
fn box_shadow(style: &StyleObject) -> Option<String> {
    let color = style.get("shadowColor")?.as_str()?;
    let offset = style.get("shadowOffset").and_then(Value::as_object);
    let px = |v: Option<&Value>| v.and_then(Value::as_f64).unwrap_or(0.0);
    let width = px(offset.and_then(|o| o.get("width")));
    let height = px(offset.and_then(|o| o.get("height")));
    let radius = px(style.get("shadowRadius"));
    let color = match style.get("shadowOpacity").and_then(Value::as_f64) {
        Some(opacity) => with_opacity(color, opacity),
        None => color.to_string(),
    };
    Some(format!("{width}px {height}px {radius}px {color}"))
}

/// Apply `opacity` to an opaque `rgb(...)` or `#rrggbb` color.
fn with_opacity(color: &str, opacity: f64) -> String {
    if let Some(inner) = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return format!("rgba({inner}, {opacity})");
    }
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 {
            let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
            return format!("#{hex}{alpha:02x}");
        }
    }
    color.to_string()
}
