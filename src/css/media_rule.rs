//! Media-scoped atomic rules.
//!
//! Wraps an atomic class in an `@media` block so the browser decides when the
//! declaration applies. The scoped class gets its own identifier
//! (`<identifier>_<mediaKey>`) and a `:root` prefix repeated once per priority
//! level, so conditions registered later outrank earlier ones.

use crate::css::atomic::AtomicStyle;
use crate::media::{MediaQuery, MEDIA_SEP};

/// A condition-scoped atomic rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStyleRule {
    /// Style property name (camelCase).
    pub property: String,
    /// Scoped class name, e.g. `_color-9c1f2e3d4c5b6a70_sm`.
    pub identifier: String,
    /// Full `@media` rule text.
    pub rule: String,
}

/// Scope `style` to the condition `media_key` defined by `query`.
pub fn media_style(
    style: &AtomicStyle,
    media_key: &str,
    query: &MediaQuery,
    priority: usize,
) -> MediaStyleRule {
    let identifier = format!("{}{MEDIA_SEP}{media_key}", style.identifier);
    let precedence = ":root".repeat(priority.max(1));
    let rule = format!(
        "@media {}{{{precedence} .{identifier}{{{};}}}}",
        query.to_css(),
        style.declaration(),
    );
    MediaStyleRule {
        property: style.property.clone(),
        identifier,
        rule,
    }
}
