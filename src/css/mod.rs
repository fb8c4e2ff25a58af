//! Web output: atomic classes, media-scoped rules, and the rule registry.

pub mod atomic;
pub mod media_rule;
pub mod registry;

pub use atomic::{AtomicCss, AtomicGenerator, AtomicStyle};
pub use media_rule::{media_style, MediaStyleRule};
pub use registry::RuleRegistry;
