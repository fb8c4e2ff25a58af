//! Registry of recognized media conditions.
//!
//! Maps the identifier after the `$` prefix (`$sm`, `$gtMd`) to its
//! [`MediaQuery`]. Registration order is significant: a condition's priority
//! is its 1-based position, and later conditions win on the web path.

use serde::Deserialize;

use crate::media::query::{MediaQuery, MediaQueryError};

/// Ordered map of media condition identifier to query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaQueryConfig {
    queries: Vec<(String, MediaQuery)>,
}

/// A registry entry as written in JSON: either CSS text or a bounds object.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuery {
    Css(String),
    Bounds(MediaQuery),
}

impl MediaQueryConfig {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace in place) the condition `key`.
    pub fn with(mut self, key: impl Into<String>, query: MediaQuery) -> Self {
        self.insert(key, query);
        self
    }

    /// Register (or replace in place) the condition `key`.
    pub fn insert(&mut self, key: impl Into<String>, query: MediaQuery) {
        let key = key.into();
        match self.queries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = query,
            None => self.queries.push((key, query)),
        }
    }

    /// Parse a JSON object such as
    /// `{"sm": {"maxWidth": 800}, "tall": "(min-height: 900px)"}`.
    pub fn from_json(input: &str) -> Result<Self, MediaQueryError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(input)?;
        let mut config = Self::new();
        for (key, value) in raw {
            let query = match serde_json::from_value::<RawQuery>(value)? {
                RawQuery::Bounds(query) => query,
                RawQuery::Css(text) => {
                    MediaQuery::parse(&text).map_err(|source| MediaQueryError::InvalidEntry {
                        key: key.clone(),
                        source: Box::new(source),
                    })?
                }
            };
            config.insert(key, query);
        }
        Ok(config)
    }

    /// Look up a condition.
    pub fn get(&self, key: &str) -> Option<&MediaQuery> {
        self.queries
            .iter()
            .find_map(|(k, q)| (k == key).then_some(q))
    }

    /// Returns `true` if `key` is a recognized condition.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// 1-based registration position of `key`.
    pub fn priority(&self, key: &str) -> Option<usize> {
        self.queries
            .iter()
            .position(|(k, _)| k == key)
            .map(|index| index + 1)
    }

    /// Iterate conditions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MediaQuery)> {
        self.queries.iter().map(|(k, q)| (k.as_str(), q))
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
