//! Default prop mapper: variants, shorthands, theme tokens.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{MappedProp, PropMapper, Variant};
use crate::theme::Theme;
use crate::value::{PropBag, StyleObject, Value};

/// Shorthands installed by [`StyledMapper::default`] and [`StyledMapper::new`].
pub const DEFAULT_SHORTHANDS: &[(&str, &[&str])] = &[
    ("p", &["paddingTop", "paddingRight", "paddingBottom", "paddingLeft"]),
    ("px", &["paddingLeft", "paddingRight"]),
    ("py", &["paddingTop", "paddingBottom"]),
    ("m", &["marginTop", "marginRight", "marginBottom", "marginLeft"]),
    ("mx", &["marginLeft", "marginRight"]),
    ("my", &["marginTop", "marginBottom"]),
    ("bc", &["backgroundColor"]),
    ("br", &["borderRadius"]),
    ("w", &["width"]),
    ("h", &["height"]),
];

/// The mapper a [`StaticConfig`](crate::config::StaticConfig) uses unless a
/// custom one is supplied.
///
/// Resolution order for a raw `(key, value)`:
/// 1. declared variant: the matching entry's style (empty if none matches);
/// 2. shorthand: one entry per long-hand key, all with the same value;
/// 3. `"$token"` value found in the theme: the key with the token's value;
/// 4. anything else passes through.
///
/// Variant output is itself shorthand-expanded and token-resolved.
#[derive(Debug, Clone)]
pub struct StyledMapper {
    variants: Arc<BTreeMap<String, Variant>>,
    shorthands: BTreeMap<String, Vec<String>>,
}

impl Default for StyledMapper {
    fn default() -> Self {
        Self::new(Arc::default())
    }
}

impl StyledMapper {
    /// Create a mapper over `variants` with the default shorthand table.
    pub fn new(variants: Arc<BTreeMap<String, Variant>>) -> Self {
        let shorthands = DEFAULT_SHORTHANDS
            .iter()
            .map(|(short, long)| {
                (
                    (*short).to_string(),
                    long.iter().map(|k| (*k).to_string()).collect(),
                )
            })
            .collect();
        Self {
            variants,
            shorthands,
        }
    }

    /// Add or replace a shorthand.
    pub fn with_shorthand(mut self, short: impl Into<String>, longhands: Vec<String>) -> Self {
        self.shorthands.insert(short.into(), longhands);
        self
    }

    /// Long-hand keys for `key`, if it is a shorthand.
    pub fn longhands(&self, key: &str) -> Option<&[String]> {
        self.shorthands.get(key).map(Vec::as_slice)
    }

    /// Push `key`/`value` into `out`, expanding shorthands and resolving tokens.
    fn expand_into(&self, key: &str, value: &Value, theme: &Theme, out: &mut StyleObject) {
        let value = theme.resolve(value);
        match self.longhands(key) {
            Some(longhands) => {
                for long in longhands {
                    out.insert(long.clone(), value.clone());
                }
            }
            None => {
                out.insert(key.to_string(), value);
            }
        }
    }
}

impl PropMapper for StyledMapper {
    fn map(&self, key: &str, value: &Value, theme: &Theme, props: &PropBag) -> MappedProp {
        if let Some(variant) = self.variants.get(key) {
            let mut out = StyleObject::new();
            if let Some(style) = variant.resolve(value, theme, props) {
                for (k, v) in &style {
                    self.expand_into(k, v, theme, &mut out);
                }
            }
            return MappedProp::Expanded(out);
        }

        if self.shorthands.contains_key(key) {
            let mut out = StyleObject::new();
            self.expand_into(key, value, theme, &mut out);
            return MappedProp::Expanded(out);
        }

        if let Some(token) = theme.token(value) {
            let mut out = StyleObject::new();
            out.insert(key.to_string(), token.clone());
            return MappedProp::Expanded(out);
        }

        MappedProp::PassThrough
    }
}
