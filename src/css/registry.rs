//! Process-wide registered CSS rules.
//!
//! Rules are keyed by identifier. Registering an identifier that is already
//! present does nothing, so any number of renders may register the same rule
//! concurrently and it is stored (and announced to the listener) once.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Called with `(identifier, rule)` when a rule is registered for the first time.
pub type RuleListener = Box<dyn Fn(&str, &str) + Send + Sync>;

/// Identifier-deduplicated rule store.
#[derive(Default)]
pub struct RuleRegistry {
    inner: RwLock<Rules>,
    listener: Option<RuleListener>,
}

#[derive(Debug, Default)]
struct Rules {
    identifiers: HashSet<String>,
    /// `(identifier, rule)` in first-registration order.
    ordered: Vec<(String, String)>,
}

static GLOBAL: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::new);

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that reports each new rule to `listener`,
    /// e.g. to insert it into a live stylesheet.
    pub fn with_listener<F>(listener: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        Self {
            inner: RwLock::default(),
            listener: Some(Box::new(listener)),
        }
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static RuleRegistry {
        &GLOBAL
    }

    /// Register `rule` under `identifier`. Returns `true` if it was new.
    pub fn register(&self, identifier: &str, rule: &str) -> bool {
        if self.inner.read().identifiers.contains(identifier) {
            return false;
        }
        {
            let mut rules = self.inner.write();
            if !rules.identifiers.insert(identifier.to_string()) {
                return false;
            }
            rules
                .ordered
                .push((identifier.to_string(), rule.to_string()));
        }
        tracing::trace!(identifier, "registered css rule");
        if let Some(listener) = &self.listener {
            listener(identifier, rule);
        }
        true
    }

    /// Returns `true` if `identifier` has been registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.inner.read().identifiers.contains(identifier)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.inner.read().ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rule texts in registration order.
    pub fn rules(&self) -> Vec<String> {
        self.inner
            .read()
            .ordered
            .iter()
            .map(|(_, rule)| rule.clone())
            .collect()
    }

    /// The stylesheet text: one rule per line, in registration order.
    pub fn css_text(&self) -> String {
        self.rules().join("\n")
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.len())
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
