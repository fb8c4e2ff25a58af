//! Value normalization for regular props.
//!
//! Each raw prop is run through the component's prop mapper and every
//! resolved entry is routed by [`classify_resolved`]: into the style under
//! construction, into the transform list, into the view props, or out as an
//! explicit style entry. The style under construction lives in a
//! [`StyleAccumulator`], which flushes it whenever an explicit style object
//! arrives so declaration order is preserved.

use crate::config::StaticConfig;
use crate::split::classify::{classify_resolved, Platform, ResolvedKind};
use crate::style::{fix_shadow, merge_transform};
use crate::theme::Theme;
use crate::value::{json, PropBag, StyleObject, Value};

/// Ordered style output plus the style object currently being assembled.
#[derive(Debug, Default)]
pub struct StyleAccumulator {
    current: Option<StyleObject>,
    styles: Vec<StyleObject>,
}

impl StyleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style under construction, created on first use.
    pub fn current(&mut self) -> &mut StyleObject {
        self.current.get_or_insert_with(StyleObject::new)
    }

    /// Push the style under construction (shadow-normalized), if any.
    pub fn flush(&mut self) {
        if let Some(mut style) = self.current.take() {
            fix_shadow(&mut style);
            self.styles.push(style);
        }
    }

    /// Flush, then push `style` as its own entry (shadow-normalized).
    pub fn push_explicit(&mut self, mut style: StyleObject) {
        self.flush();
        fix_shadow(&mut style);
        self.styles.push(style);
    }

    /// Push an already-finished style object without touching the current one.
    pub fn push(&mut self, style: StyleObject) {
        self.styles.push(style);
    }

    /// Flush once more and return the ordered style list.
    pub fn finish(mut self) -> Vec<StyleObject> {
        self.flush();
        self.styles
    }
}

/// Apply the `flex` shorthand: `flexGrow: value`, `flexShrink: 1`.
/// `flexBasis` is never touched.
pub fn expand_flex(style: &mut StyleObject, value: Value) {
    style.insert("flexGrow".into(), value);
    style.insert("flexShrink".into(), json!(1));
}

/// Map `key`/`value` through the configuration's prop mapper.
pub fn resolve_entries(
    key: &str,
    value: &Value,
    config: &StaticConfig,
    theme: &Theme,
    props: &PropBag,
) -> Vec<(String, Value)> {
    config
        .map_prop(key, value, theme, props)
        .into_entries(key, value)
}

/// Routes regular props for one split invocation.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    pub config: &'a StaticConfig,
    pub theme: &'a Theme,
    pub props: &'a PropBag,
    pub platform: Platform,
}

impl Normalizer<'_> {
    /// Normalize one raw prop into `acc` and `view_props`.
    pub fn normalize(
        &self,
        key: &str,
        value: &Value,
        acc: &mut StyleAccumulator,
        view_props: &mut PropBag,
    ) {
        for (key, value) in resolve_entries(key, value, self.config, self.theme, self.props) {
            match classify_resolved(&key, self.config, self.platform) {
                ResolvedKind::StyleSlot => match value {
                    Value::Object(style) => acc.push_explicit(style),
                    Value::Array(items) => {
                        // Style arrays push each object in order.
                        acc.flush();
                        for item in items {
                            if let Value::Object(style) = item {
                                acc.push_explicit(style);
                            }
                        }
                    }
                    _ => acc.flush(),
                },
                ResolvedKind::Flex => expand_flex(acc.current(), value),
                ResolvedKind::Transform => merge_transform(acc.current(), &key, value),
                ResolvedKind::Style => {
                    acc.current().insert(key, value);
                }
                ResolvedKind::ViewProp => {
                    view_props.insert(key, value);
                }
                ResolvedKind::Variant => {
                    tracing::trace!(variant = %key, "dropping unconsumed variant prop");
                }
            }
        }
    }
}
