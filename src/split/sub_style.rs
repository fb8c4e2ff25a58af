//! Resolution of nested style groups (pseudo states and media conditions).
//!
//! A nested group holds only style fields, so every resolved entry lands in
//! one output object. Mapping, `flex` expansion and transform merging follow
//! the main pass exactly, so a prop behaves the same whether it is written
//! directly or inside `hoverStyle` / `$sm`.

use crate::config::StaticConfig;
use crate::split::normalize::{expand_flex, resolve_entries};
use crate::style::keys::is_transform_key;
use crate::style::{fix_shadow, merge_transform};
use crate::theme::Theme;
use crate::value::{PropBag, StyleObject, Value};

/// Resolve the raw group `raw` into a finished style object.
///
/// `props` is the component's full prop bag, passed through to the mapper.
/// Non-object groups resolve to an empty style.
pub fn resolve_sub_style(
    raw: &Value,
    config: &StaticConfig,
    theme: &Theme,
    props: &PropBag,
) -> StyleObject {
    let mut out = StyleObject::new();
    let Some(raw) = raw.as_object() else {
        return out;
    };

    for (key, value) in raw {
        for (key, value) in resolve_entries(key, value, config, theme, props) {
            if key == "flex" {
                expand_flex(&mut out, value);
            } else if is_transform_key(&key) {
                merge_transform(&mut out, &key, value);
            } else {
                out.insert(key, value);
            }
        }
    }

    fix_shadow(&mut out);
    out
}
