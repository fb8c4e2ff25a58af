//! Theme values.
//!
//! A theme is an opaque, ordered map of token names to values. The splitter
//! never looks inside; prop mappers use it to resolve `$token` references.

use serde::{Deserialize, Serialize};

use crate::value::{StyleObject, Value};

/// Prefix marking a value as a theme token reference (`"$background"`).
pub const TOKEN_PREFIX: char = '$';

/// A resolved theme: token name (without `$`) to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    values: serde_json::Map<String, Value>,
}

impl Theme {
    /// Create an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a theme from a JSON object.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Builder-style token insertion.
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Look up a token by name (without the `$` prefix).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Resolve a `"$name"` reference. Returns `None` if `value` is not a token
    /// reference or the theme has no such token.
    pub fn token(&self, value: &Value) -> Option<&Value> {
        let name = value.as_str()?.strip_prefix(TOKEN_PREFIX)?;
        self.get(name)
    }

    /// Resolve `value` if it is a known token reference, otherwise clone it.
    pub fn resolve(&self, value: &Value) -> Value {
        self.token(value).unwrap_or(value).clone()
    }

    /// Resolve every token reference among the top-level values of `style`.
    pub fn resolve_style(&self, style: &StyleObject) -> StyleObject {
        style
            .iter()
            .map(|(key, value)| (key.clone(), self.resolve(value)))
            .collect()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the theme has no tokens.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
