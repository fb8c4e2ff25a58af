//! Live responsive-condition state.
//!
//! The host refreshes this from its layout/viewport observer; the native
//! splitter reads it on every render. There is no subscription: a render sees
//! whatever state was current when it ran.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use crate::media::config::MediaQueryConfig;

/// Condition identifier to "currently active".
#[derive(Debug, Default)]
pub struct MediaState {
    active: RwLock<HashMap<String, bool>>,
}

impl MediaState {
    /// Create a state with every condition inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `key` is active.
    pub fn set(&self, key: impl Into<String>, active: bool) {
        self.active.write().insert(key.into(), active);
    }

    /// Returns `true` if `key` is currently active. Unknown keys are inactive.
    pub fn is_active(&self, key: &str) -> bool {
        self.active.read().get(key).copied().unwrap_or(false)
    }

    /// Re-evaluate every condition in `config` against a `width` x `height`
    /// viewport. Returns `true` if any condition changed.
    pub fn update_viewport(&self, config: &MediaQueryConfig, width: f64, height: f64) -> bool {
        let mut active = self.active.write();
        let mut changed = false;
        for (key, query) in config.iter() {
            let now = query.matches(width, height);
            let before = active.insert(key.to_string(), now);
            if before != Some(now) {
                changed = true;
            }
        }
        if changed {
            tracing::trace!(width, height, "media state changed");
        }
        changed
    }

    /// A sorted copy of the current state.
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.active
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }
}
