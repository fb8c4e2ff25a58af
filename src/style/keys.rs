//! Valid style-key tables.
//!
//! A prop is a plain style only if its (resolved) key is listed here for the
//! component's mode. View components accept [`VIEW_STYLE_KEYS`] plus the
//! transform keys; text components additionally accept [`TEXT_ONLY_STYLE_KEYS`].

use std::collections::HashSet;

/// Layout, box, color, border and shadow properties accepted by every component.
pub const VIEW_STYLE_KEYS: &[&str] = &[
    // Layout
    "display",
    "position",
    "overflow",
    "zIndex",
    "top",
    "right",
    "bottom",
    "left",
    "start",
    "end",
    "direction",
    // Flex
    "flexDirection",
    "flexWrap",
    "flexGrow",
    "flexShrink",
    "flexBasis",
    "alignItems",
    "alignContent",
    "alignSelf",
    "justifyContent",
    "aspectRatio",
    // Sizing
    "width",
    "height",
    "minWidth",
    "minHeight",
    "maxWidth",
    "maxHeight",
    // Spacing
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "marginHorizontal",
    "marginVertical",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "paddingHorizontal",
    "paddingVertical",
    // Color
    "color",
    "backgroundColor",
    "opacity",
    "backfaceVisibility",
    // Border
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderWidth",
    "borderTopWidth",
    "borderRightWidth",
    "borderBottomWidth",
    "borderLeftWidth",
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderStyle",
    // Shadow
    "shadowColor",
    "shadowOffset",
    "shadowOpacity",
    "shadowRadius",
    "elevation",
    // Web-only passthroughs that still style the element
    "cursor",
    "pointerEvents",
    "userSelect",
];

/// Typography properties accepted only by text components.
pub const TEXT_ONLY_STYLE_KEYS: &[&str] = &[
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "fontVariant",
    "letterSpacing",
    "lineHeight",
    "textAlign",
    "textAlignVertical",
    "textDecorationLine",
    "textDecorationStyle",
    "textDecorationColor",
    "textShadowColor",
    "textShadowOffset",
    "textShadowRadius",
    "textTransform",
    "includeFontPadding",
    "writingDirection",
];

/// Properties that compose into the `transform` list.
pub const TRANSFORM_KEYS: &[&str] = &[
    "x",
    "y",
    "translateX",
    "translateY",
    "scale",
    "scaleX",
    "scaleY",
    "rotate",
    "rotateX",
    "rotateY",
    "rotateZ",
    "skewX",
    "skewY",
    "perspective",
    "matrix",
];

/// Pseudo-state style groups recognized by default.
pub const PSEUDO_KEYS: &[&str] = &["hoverStyle", "pressStyle", "focusStyle"];

/// Returns `true` if `key` composes into the `transform` list.
pub fn is_transform_key(key: &str) -> bool {
    TRANSFORM_KEYS.contains(&key)
}

/// The default valid style-key set for a view (`is_text == false`) or text component.
pub fn default_style_keys(is_text: bool) -> HashSet<String> {
    let mut keys: HashSet<String> = VIEW_STYLE_KEYS
        .iter()
        .chain(TRANSFORM_KEYS)
        .map(|k| (*k).to_string())
        .collect();
    if is_text {
        keys.extend(TEXT_ONLY_STYLE_KEYS.iter().map(|k| (*k).to_string()));
    }
    keys
}

/// The default pseudo-group key set.
pub fn default_pseudo_keys() -> HashSet<String> {
    PSEUDO_KEYS.iter().map(|k| (*k).to_string()).collect()
}
