//! Key classification.
//!
//! Classification is a pure function of the key and the static configuration
//! (plus the media registry and target platform). Raw props are sorted into
//! [`PropClass`]; each entry a prop mapper resolves to is sorted into
//! [`ResolvedKind`].

use crate::config::StaticConfig;
use crate::media::{MediaQueryConfig, MEDIA_PREFIX};
use crate::style::keys::is_transform_key;

/// Key of an explicit nested style object.
pub const STYLE_KEY: &str = "style";

/// Prefix of private explicit style slots (`_style`, `_styleHover`, ...).
pub const PRIVATE_STYLE_PREFIX: &str = "_style";

/// Target platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Host without a CSS engine; styles are inline objects.
    Native,
    /// Browser; media styles become atomic classes.
    Web,
}

/// How the main pass routes a raw prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropClass<'a> {
    /// `$<key>` where `<key>` is a recognized media condition.
    Media(&'a str),
    /// `$`-prefixed but not a recognized condition; forwarded as a view prop.
    UnknownMedia,
    /// A pseudo-state style group (`hoverStyle`, ...).
    Pseudo,
    /// Anything else: mapped, then sorted by [`ResolvedKind`].
    Regular,
}

/// What a resolved entry becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedKind {
    /// Explicit style object: flush, then push as its own entry.
    StyleSlot,
    /// `flex` shorthand: `flexGrow` + `flexShrink: 1`.
    Flex,
    /// Forwarded to the platform element.
    ViewProp,
    /// Appended to the `transform` list.
    Transform,
    /// Assigned into the style under construction.
    Style,
    /// Declared variant the mapper left unconsumed; dropped.
    Variant,
}

/// Classify a raw prop key.
pub fn classify_prop<'a>(
    key: &'a str,
    config: &StaticConfig,
    media: &MediaQueryConfig,
) -> PropClass<'a> {
    if let Some(media_key) = key.strip_prefix(MEDIA_PREFIX) {
        return if media.contains(media_key) {
            PropClass::Media(media_key)
        } else {
            PropClass::UnknownMedia
        };
    }
    if config.is_pseudo_key(key) {
        return PropClass::Pseudo;
    }
    PropClass::Regular
}

/// Classify a resolved entry key.
pub fn classify_resolved(key: &str, config: &StaticConfig, platform: Platform) -> ResolvedKind {
    if key == STYLE_KEY || key.starts_with(PRIVATE_STYLE_PREFIX) {
        return ResolvedKind::StyleSlot;
    }
    if key == "flex" {
        return ResolvedKind::Flex;
    }
    if platform == Platform::Native && key == "pointerEvents" {
        return ResolvedKind::ViewProp;
    }
    if config.is_style_key(key) {
        return if is_transform_key(key) {
            ResolvedKind::Transform
        } else {
            ResolvedKind::Style
        };
    }
    if config.is_variant(key) {
        ResolvedKind::Variant
    } else {
        ResolvedKind::ViewProp
    }
}
