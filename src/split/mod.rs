//! The prop splitter.
//!
//! One pass over a component's prop bag produces everything the renderer
//! needs: view props to forward, an ordered list of inline style objects,
//! pseudo-state styles, and (on the web) atomic class names for media styles.
//!
//! ```text
//! $media  ──► sub-style ──► native: push if condition active
//!                      └──► web:    atomic classes → @media rules → registry
//! pseudo  ──► sub-style ──► pseudos[key]
//! other   ──► prop mapper ──► style / transform / flex / explicit style / view prop
//! ```

pub mod classify;
pub mod normalize;
pub mod sub_style;

use std::fmt;

use serde::Serialize;

use crate::config::StaticConfig;
use crate::css::atomic::{AtomicCss, AtomicGenerator};
use crate::css::media_rule::media_style;
use crate::css::registry::RuleRegistry;
use crate::media::{MediaQueryConfig, MediaState};
use crate::theme::Theme;
use crate::value::{is_falsy, is_truthy, PropBag, StyleObject, Value};

pub use classify::{classify_prop, classify_resolved, Platform, PropClass, ResolvedKind};
use normalize::{Normalizer, StyleAccumulator};
pub use sub_style::resolve_sub_style;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Pseudo-state styles keyed by group name (`hoverStyle`, `pressStyle`, ...),
/// in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Pseudos {
    styles: serde_json::Map<String, Value>,
}

impl Pseudos {
    /// Style for the group `key`.
    pub fn get(&self, key: &str) -> Option<&StyleObject> {
        self.styles.get(key).and_then(Value::as_object)
    }

    pub fn hover(&self) -> Option<&StyleObject> {
        self.get("hoverStyle")
    }

    pub fn press(&self) -> Option<&StyleObject> {
        self.get("pressStyle")
    }

    pub fn focus(&self) -> Option<&StyleObject> {
        self.get("focusStyle")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleObject)> {
        self.styles
            .iter()
            .filter_map(|(k, v)| v.as_object().map(|style| (k.as_str(), style)))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    fn insert(&mut self, key: String, style: StyleObject) {
        self.styles.insert(key, Value::Object(style));
    }
}

/// Result of splitting a prop bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitStyles {
    /// Props forwarded to the platform element.
    pub view_props: PropBag,
    /// Inline styles in declaration order; later entries win when merged.
    pub style: Vec<StyleObject>,
    /// Pseudo-state styles, if any group was given.
    pub pseudos: Option<Pseudos>,
    /// Media class names (web only), in declaration order.
    pub class_names: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// Where the split output is headed.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    /// Inline styles; media styles apply if active in `media_state`.
    Native { media_state: &'a MediaState },
    /// Media styles become atomic classes registered in `registry`.
    Web {
        generator: &'a dyn AtomicGenerator,
        registry: &'a RuleRegistry,
    },
}

impl<'a> Target<'a> {
    pub fn native(media_state: &'a MediaState) -> Self {
        Target::Native { media_state }
    }

    /// Web target using the built-in [`AtomicCss`] generator.
    pub fn web(registry: &'a RuleRegistry) -> Self {
        Target::Web {
            generator: &AtomicCss,
            registry,
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Target::Native { .. } => Platform::Native,
            Target::Web { .. } => Platform::Web,
        }
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Native { media_state } => f
                .debug_struct("Native")
                .field("media_state", media_state)
                .finish(),
            Target::Web { registry, .. } => f
                .debug_struct("Web")
                .field("registry", registry)
                .finish_non_exhaustive(),
        }
    }
}

// ---------------------------------------------------------------------------
// Splitter
// ---------------------------------------------------------------------------

/// Splits prop bags for one component against one theme and target.
#[derive(Debug, Clone, Copy)]
pub struct Splitter<'a> {
    config: &'a StaticConfig,
    theme: &'a Theme,
    media: &'a MediaQueryConfig,
    target: Target<'a>,
}

impl<'a> Splitter<'a> {
    pub fn new(
        config: &'a StaticConfig,
        theme: &'a Theme,
        media: &'a MediaQueryConfig,
        target: Target<'a>,
    ) -> Self {
        Self {
            config,
            theme,
            media,
            target,
        }
    }

    /// Split `props` into view props, ordered styles, pseudos and class names.
    pub fn split(&self, props: &PropBag) -> SplitStyles {
        let debug = cfg!(debug_assertions) && props.get("debug").is_some_and(is_truthy);
        let normalizer = Normalizer {
            config: self.config,
            theme: self.theme,
            props,
            platform: self.target.platform(),
        };

        let mut view_props = PropBag::new();
        let mut acc = StyleAccumulator::new();
        let mut pseudos: Option<Pseudos> = None;
        let mut class_names: Option<Vec<String>> = None;

        for (key, value) in props {
            match classify_prop(key, self.config, self.media) {
                PropClass::UnknownMedia => {
                    view_props.insert(key.clone(), value.clone());
                }
                PropClass::Media(media_key) => {
                    let style = resolve_sub_style(value, self.config, self.theme, props);
                    match self.target {
                        Target::Native { media_state } => {
                            if media_state.is_active(media_key) {
                                acc.flush();
                                acc.push(style);
                            }
                        }
                        Target::Web {
                            generator,
                            registry,
                        } => {
                            self.emit_media_classes(
                                media_key,
                                &style,
                                generator,
                                registry,
                                &mut class_names,
                                debug,
                            );
                        }
                    }
                }
                PropClass::Pseudo => {
                    if is_falsy(value) {
                        continue;
                    }
                    let style = resolve_sub_style(value, self.config, self.theme, props);
                    pseudos
                        .get_or_insert_with(Pseudos::default)
                        .insert(key.clone(), style);
                }
                PropClass::Regular => {
                    normalizer.normalize(key, value, &mut acc, &mut view_props);
                }
            }
        }

        let split = SplitStyles {
            view_props,
            style: acc.finish(),
            pseudos,
            class_names,
        };

        if debug {
            tracing::debug!(
                props = ?props,
                view_props = ?split.view_props,
                style = ?split.style,
                pseudos = ?split.pseudos,
                class_names = ?split.class_names,
                "split style props"
            );
        }

        split
    }

    /// Generate, scope, and register the atomic classes for one media style.
    fn emit_media_classes(
        &self,
        media_key: &str,
        style: &StyleObject,
        generator: &dyn AtomicGenerator,
        registry: &RuleRegistry,
        class_names: &mut Option<Vec<String>>,
        debug: bool,
    ) {
        let Some(query) = self.media.get(media_key) else {
            return;
        };
        let priority = self.media.priority(media_key).unwrap_or(1);
        let atomics = generator.generate(style);

        if debug {
            tracing::debug!(media = media_key, style = ?style, atomics = ?atomics, "media styles");
        }

        for atomic in &atomics {
            let scoped = media_style(atomic, media_key, query, priority);
            registry.register(&scoped.identifier, &scoped.rule);
            class_names
                .get_or_insert_with(Vec::new)
                .push(scoped.identifier);
        }
    }
}

/// Split `props` in one call. See [`Splitter::split`].
pub fn split_styles(
    props: &PropBag,
    config: &StaticConfig,
    theme: &Theme,
    media: &MediaQueryConfig,
    target: Target<'_>,
) -> SplitStyles {
    Splitter::new(config, theme, media, target).split(props)
}
