//! Static component configuration.
//!
//! A [`StaticConfig`] is built once per component, ahead of rendering, and is
//! immutable afterwards. It answers the splitter's classification questions
//! (is this a style key? a pseudo group? a declared variant?) and owns the
//! [`PropMapper`] that expands raw props into resolved style/view entries.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::mapper::StyledMapper;
use crate::media::MEDIA_PREFIX;
use crate::style::keys::{default_pseudo_keys, default_style_keys};
use crate::theme::Theme;
use crate::value::{value_key, PropBag, StyleObject, Value};

// ---------------------------------------------------------------------------
// Prop mapping
// ---------------------------------------------------------------------------

/// Result of mapping a single raw prop.
#[derive(Debug, Clone, PartialEq)]
pub enum MappedProp {
    /// Use the raw key and value unchanged.
    PassThrough,
    /// Replace the raw prop with these resolved entries (possibly none).
    Expanded(StyleObject),
}

impl MappedProp {
    /// Flatten into the resolved `(key, value)` entries for `raw_key`/`raw_value`.
    pub fn into_entries(self, raw_key: &str, raw_value: &Value) -> Vec<(String, Value)> {
        match self {
            MappedProp::PassThrough => vec![(raw_key.to_string(), raw_value.clone())],
            MappedProp::Expanded(map) => map.into_iter().collect(),
        }
    }
}

/// Expands one raw prop into resolved entries.
///
/// Implementations must be pure: the same inputs always give the same output,
/// and no input is mutated.
pub trait PropMapper: Send + Sync {
    /// Map `key`/`value`, consulting `theme` and the full prop bag `props`.
    fn map(&self, key: &str, value: &Value, theme: &Theme, props: &PropBag) -> MappedProp;
}

impl<F> PropMapper for F
where
    F: Fn(&str, &Value, &Theme, &PropBag) -> MappedProp + Send + Sync,
{
    fn map(&self, key: &str, value: &Value, theme: &Theme, props: &PropBag) -> MappedProp {
        self(key, value, theme, props)
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// Computes a variant's style from the prop value, theme, and props.
pub type VariantFn = Arc<dyn Fn(&Value, &Theme, &PropBag) -> StyleObject + Send + Sync>;

/// One entry of a variant axis.
#[derive(Clone)]
pub enum VariantValue {
    /// A fixed style object.
    Static(StyleObject),
    /// A style computed from the prop value.
    Dynamic(VariantFn),
}

impl fmt::Debug for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantValue::Static(style) => f.debug_tuple("Static").field(style).finish(),
            VariantValue::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// A declared variant axis, e.g. `size: { small: {...}, large: {...} }`.
///
/// Entries are matched by the prop value rendered as text (`"true"`, `"large"`,
/// `"10"`). An entry whose key starts with `...` is the spread fallback, used
/// when no exact entry matches.
#[derive(Debug, Clone, Default)]
pub struct Variant {
    entries: Vec<(String, VariantValue)>,
}

/// Key prefix of a variant's spread fallback entry.
pub const SPREAD_PREFIX: &str = "...";

impl Variant {
    /// Create a variant with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a static entry. Non-object `style` values are stored as an empty style.
    pub fn when(mut self, key: impl Into<String>, style: Value) -> Self {
        let style = match style {
            Value::Object(map) => map,
            _ => StyleObject::new(),
        };
        self.entries.push((key.into(), VariantValue::Static(style)));
        self
    }

    /// Add a computed entry.
    pub fn when_fn<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value, &Theme, &PropBag) -> StyleObject + Send + Sync + 'static,
    {
        self.entries
            .push((key.into(), VariantValue::Dynamic(Arc::new(f))));
        self
    }

    /// Add the spread fallback (`...name`), computed from the prop value.
    pub fn spread<F>(self, name: &str, f: F) -> Self
    where
        F: Fn(&Value, &Theme, &PropBag) -> StyleObject + Send + Sync + 'static,
    {
        self.when_fn(format!("{SPREAD_PREFIX}{name}"), f)
    }

    /// Resolve the style for `value`, or `None` if no entry applies.
    pub fn resolve(&self, value: &Value, theme: &Theme, props: &PropBag) -> Option<StyleObject> {
        let key = value_key(value);
        let entry = self
            .entries
            .iter()
            .find(|(k, _)| *k == key)
            .or_else(|| self.entries.iter().find(|(k, _)| k.starts_with(SPREAD_PREFIX)))?;

        Some(match &entry.1 {
            VariantValue::Static(style) => style.clone(),
            VariantValue::Dynamic(f) => f(value, theme, props),
        })
    }

    /// Number of entries, including the spread fallback.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from building a [`StaticConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("variant name must not be empty")]
    EmptyVariantName,
    #[error("variant `{0}` starts with the media prefix `$`")]
    MediaPrefixedVariant(String),
    #[error("variant `{0}` collides with a pseudo style group of the same name")]
    PseudoVariant(String),
    #[error("shorthand `{0}` expands to no properties")]
    EmptyShorthand(String),
}

// ---------------------------------------------------------------------------
// StaticConfig
// ---------------------------------------------------------------------------

/// Per-component configuration consumed by the splitter.
#[derive(Clone)]
pub struct StaticConfig {
    is_text: bool,
    style_keys: HashSet<String>,
    pseudo_keys: HashSet<String>,
    variants: Arc<BTreeMap<String, Variant>>,
    default_props: PropBag,
    prop_mapper: Arc<dyn PropMapper>,
}

impl fmt::Debug for StaticConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticConfig")
            .field("is_text", &self.is_text)
            .field("style_keys", &self.style_keys.len())
            .field("pseudo_keys", &self.pseudo_keys)
            .field("variants", &self.variants.keys().collect::<Vec<_>>())
            .field("default_props", &self.default_props)
            .finish_non_exhaustive()
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            is_text: false,
            style_keys: default_style_keys(false),
            pseudo_keys: default_pseudo_keys(),
            variants: Arc::default(),
            default_props: PropBag::new(),
            prop_mapper: Arc::new(StyledMapper::default()),
        }
    }
}

impl StaticConfig {
    /// Start building a configuration.
    pub fn builder() -> StaticConfigBuilder {
        StaticConfigBuilder::default()
    }

    /// Whether the component renders text (selects the text style-key set).
    pub fn is_text(&self) -> bool {
        self.is_text
    }

    /// Returns `true` if `key` is a valid plain style for this component.
    pub fn is_style_key(&self, key: &str) -> bool {
        self.style_keys.contains(key)
    }

    /// Returns `true` if `key` names a pseudo-state style group.
    pub fn is_pseudo_key(&self, key: &str) -> bool {
        self.pseudo_keys.contains(key)
    }

    /// Returns `true` if `key` is a declared variant name.
    pub fn is_variant(&self, key: &str) -> bool {
        self.variants.contains_key(key)
    }

    /// Look up a declared variant.
    pub fn variant(&self, key: &str) -> Option<&Variant> {
        self.variants.get(key)
    }

    /// Default props declared for the component.
    pub fn default_props(&self) -> &PropBag {
        &self.default_props
    }

    /// Run the configured prop mapper.
    pub fn map_prop(&self, key: &str, value: &Value, theme: &Theme, props: &PropBag) -> MappedProp {
        self.prop_mapper.map(key, value, theme, props)
    }

    /// Overlay `props` on the default props. Explicit props win; default keys
    /// keep their leading position.
    pub fn with_defaults(&self, props: &PropBag) -> PropBag {
        let mut merged = self.default_props.clone();
        for (key, value) in props {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

/// Builder for [`StaticConfig`].
#[derive(Default)]
pub struct StaticConfigBuilder {
    is_text: bool,
    extra_style_keys: Vec<String>,
    extra_pseudo_keys: Vec<String>,
    variants: BTreeMap<String, Variant>,
    shorthands: Vec<(String, Vec<String>)>,
    default_props: PropBag,
    prop_mapper: Option<Arc<dyn PropMapper>>,
}

impl StaticConfigBuilder {
    /// Mark the component as text (uses the typography-enabled style-key set).
    pub fn text(mut self, is_text: bool) -> Self {
        self.is_text = is_text;
        self
    }

    /// Accept an extra key as a plain style.
    pub fn style_key(mut self, key: impl Into<String>) -> Self {
        self.extra_style_keys.push(key.into());
        self
    }

    /// Accept an extra pseudo-state group key (e.g. `"disabledStyle"`).
    pub fn pseudo_key(mut self, key: impl Into<String>) -> Self {
        self.extra_pseudo_keys.push(key.into());
        self
    }

    /// Declare a variant axis.
    pub fn variant(mut self, name: impl Into<String>, variant: Variant) -> Self {
        self.variants.insert(name.into(), variant);
        self
    }

    /// Add a shorthand to the default mapper (ignored with a custom mapper).
    pub fn shorthand<I, S>(mut self, short: impl Into<String>, longhands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shorthands
            .push((short.into(), longhands.into_iter().map(Into::into).collect()));
        self
    }

    /// Set the component's default props.
    pub fn default_props(mut self, props: PropBag) -> Self {
        self.default_props = props;
        self
    }

    /// Replace the default [`StyledMapper`] with a custom mapper.
    pub fn prop_mapper(mut self, mapper: impl PropMapper + 'static) -> Self {
        self.prop_mapper = Some(Arc::new(mapper));
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<StaticConfig, ConfigError> {
        let mut pseudo_keys = default_pseudo_keys();
        pseudo_keys.extend(self.extra_pseudo_keys);

        for name in self.variants.keys() {
            if name.is_empty() {
                return Err(ConfigError::EmptyVariantName);
            }
            if name.starts_with(MEDIA_PREFIX) {
                return Err(ConfigError::MediaPrefixedVariant(name.clone()));
            }
            if pseudo_keys.contains(name) {
                return Err(ConfigError::PseudoVariant(name.clone()));
            }
        }
        if let Some((short, _)) = self.shorthands.iter().find(|(_, long)| long.is_empty()) {
            return Err(ConfigError::EmptyShorthand(short.clone()));
        }

        let mut style_keys = default_style_keys(self.is_text);
        style_keys.extend(self.extra_style_keys);

        let variants = Arc::new(self.variants);
        let prop_mapper = match self.prop_mapper {
            Some(mapper) => mapper,
            None => {
                let mut mapper = StyledMapper::new(Arc::clone(&variants));
                for (short, longhands) in self.shorthands {
                    mapper = mapper.with_shorthand(short, longhands);
                }
                Arc::new(mapper)
            }
        };

        Ok(StaticConfig {
            is_text: self.is_text,
            style_keys,
            pseudo_keys,
            variants,
            default_props: self.default_props,
            prop_mapper,
        })
    }
}
