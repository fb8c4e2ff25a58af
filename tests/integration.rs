//! Integration tests for propstyle.
//!
//! These tests exercise the public API from outside the crate: a configured
//! component, a theme, a media registry, and both render targets.

use pretty_assertions::assert_eq;
use propstyle::config::{MappedProp, StaticConfig, Variant};
use propstyle::css::{AtomicCss, AtomicGenerator, AtomicStyle, RuleRegistry};
use propstyle::media::{MediaQuery, MediaQueryConfig, MediaState};
use propstyle::split::{resolve_sub_style, split_styles, Splitter, Target};
use propstyle::style::merge_transform;
use propstyle::theme::Theme;
use propstyle::value::{json, PropBag, StyleObject, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn obj(value: Value) -> StyleObject {
    value.as_object().cloned().unwrap_or_default()
}

fn media() -> MediaQueryConfig {
    MediaQueryConfig::from_json(
        r#"{
            "sm": {"maxWidth": 800},
            "gtSm": "(min-width: 801px)",
            "tall": {"minHeight": 900}
        }"#,
    )
    .unwrap()
}

fn theme() -> Theme {
    Theme::from_json(r##"{"bg": "#fff", "accent": "tomato", "space2": 8}"##).unwrap()
}

fn button_config() -> StaticConfig {
    StaticConfig::builder()
        .variant(
            "size",
            Variant::new()
                .when("small", json!({"p": "$space2"}))
                .spread("size", |value, _, _| obj(json!({"height": value}))),
        )
        .variant("disabled", Variant::new().when("true", json!({"opacity": 0.5})))
        .default_props(obj(json!({"backgroundColor": "$bg"})))
        .build()
        .unwrap()
}

fn split_native(props: Value, state: &MediaState) -> propstyle::SplitStyles {
    split_styles(
        &obj(props),
        &StaticConfig::default(),
        &theme(),
        &media(),
        Target::native(state),
    )
}

// ---------------------------------------------------------------------------
// Sub-style resolution
// ---------------------------------------------------------------------------

#[test]
fn test_sub_style_is_deterministic() {
    let config = button_config();
    let props = obj(json!({"size": "small"}));
    let raw = json!({"size": "small", "x": 2, "bc": "$accent"});
    let first = resolve_sub_style(&raw, &config, &theme(), &props);
    let second = resolve_sub_style(&raw, &config, &theme(), &props);
    assert_eq!(first, second);
    assert_eq!(
        first,
        obj(json!({
            "paddingTop": 8,
            "paddingRight": 8,
            "paddingBottom": 8,
            "paddingLeft": 8,
            "transform": [{"translateX": 2}],
            "backgroundColor": "tomato"
        }))
    );
}

// ---------------------------------------------------------------------------
// Transforms and flex
// ---------------------------------------------------------------------------

#[test]
fn test_transform_merge_preserves_order() {
    let mut forward = StyleObject::new();
    merge_transform(&mut forward, "x", json!(1));
    merge_transform(&mut forward, "rotate", json!("2deg"));
    assert_eq!(
        Value::Object(forward),
        json!({"transform": [{"translateX": 1}, {"rotate": "2deg"}]})
    );

    let mut reverse = StyleObject::new();
    merge_transform(&mut reverse, "rotate", json!("2deg"));
    merge_transform(&mut reverse, "x", json!(1));
    assert_eq!(
        Value::Object(reverse),
        json!({"transform": [{"rotate": "2deg"}, {"translateX": 1}]})
    );
}

#[test]
fn test_transform_props_compose_in_split() {
    let out = split_native(json!({"x": 10, "y": 5, "rotate": "45deg"}), &MediaState::new());
    assert_eq!(
        out.style,
        vec![obj(json!({
            "transform": [{"translateX": 10}, {"translateY": 5}, {"rotate": "45deg"}]
        }))]
    );
}

#[test]
fn test_flex_expands_to_grow_and_shrink() {
    let out = split_native(json!({"flex": 2}), &MediaState::new());
    assert_eq!(out.style, vec![obj(json!({"flexGrow": 2, "flexShrink": 1}))]);
    assert!(!out.style[0].contains_key("flexBasis"));
}

// ---------------------------------------------------------------------------
// Declaration order
// ---------------------------------------------------------------------------

#[test]
fn test_explicit_style_splits_accumulated_styles() {
    let out = split_native(
        json!({"color": "red", "style": {"margin": 5}, "padding": 10}),
        &MediaState::new(),
    );
    assert_eq!(
        out.style,
        vec![
            obj(json!({"color": "red"})),
            obj(json!({"margin": 5})),
            obj(json!({"padding": 10})),
        ]
    );
}

#[test]
fn test_explicit_style_precedes_trailing_flush() {
    let out = split_native(
        json!({"style": {"margin": 5}, "color": "red", "padding": 10}),
        &MediaState::new(),
    );
    assert_eq!(
        out.style,
        vec![
            obj(json!({"margin": 5})),
            obj(json!({"color": "red", "padding": 10})),
        ]
    );
}

// ---------------------------------------------------------------------------
// Pass-through and pseudo
// ---------------------------------------------------------------------------

#[test]
fn test_falsy_pseudo_produces_no_entry() {
    let out = split_native(json!({"hoverStyle": null}), &MediaState::new());
    assert!(out.pseudos.is_none());
    assert!(out.style.is_empty());
    assert!(out.view_props.is_empty());
}

#[test]
fn test_unknown_media_key_is_only_a_view_prop() {
    let out = split_native(json!({"$customFlag": true}), &MediaState::new());
    assert_eq!(out.view_props, obj(json!({"$customFlag": true})));
    assert!(out.style.is_empty());
    assert!(out.pseudos.is_none());
    assert!(out.class_names.is_none());
}

#[test]
fn test_pseudo_groups_coexist() {
    let out = split_native(
        json!({
            "hoverStyle": {"bc": "$accent"},
            "pressStyle": {"scale": 0.9},
            "focusStyle": {"borderColor": "blue"}
        }),
        &MediaState::new(),
    );
    let pseudos = out.pseudos.unwrap();
    assert_eq!(pseudos.len(), 3);
    assert_eq!(pseudos.hover(), Some(&obj(json!({"backgroundColor": "tomato"}))));
    assert_eq!(pseudos.press(), Some(&obj(json!({"transform": [{"scale": 0.9}]}))));
    assert_eq!(pseudos.focus(), Some(&obj(json!({"borderColor": "blue"}))));
    assert!(out.style.is_empty());
}

// ---------------------------------------------------------------------------
// Web target
// ---------------------------------------------------------------------------

#[test]
fn test_web_media_registers_rule_once() {
    let registry = RuleRegistry::new();
    let config = StaticConfig::default();
    let theme = theme();
    let media = media();
    let splitter = Splitter::new(&config, &theme, &media, Target::web(&registry));
    let props = obj(json!({"$sm": {"color": "red"}}));

    let first = splitter.split(&props);
    let second = splitter.split(&props);

    assert_eq!(registry.len(), 1);
    assert_eq!(first.class_names, second.class_names);
    let names = first.class_names.unwrap();
    assert_eq!(names.len(), 1);
    assert!(registry.contains(&names[0]));
    assert!(registry.css_text().starts_with("@media (max-width: 800px){:root ."));
}

#[test]
fn test_web_media_classes_follow_declaration_order() {
    let registry = RuleRegistry::new();
    let out = split_styles(
        &obj(json!({"$tall": {"opacity": 1}, "$sm": {"color": "red"}, "padding": 2})),
        &StaticConfig::default(),
        &theme(),
        &media(),
        Target::web(&registry),
    );
    let names = out.class_names.unwrap();
    assert!(names[0].ends_with("_tall"));
    assert!(names[1].ends_with("_sm"));
    // Plain styles stay inline on the web path.
    assert_eq!(out.style, vec![obj(json!({"padding": 2}))]);
    assert!(registry.rules()[0].contains(":root:root:root ."));
}

#[test]
fn test_web_with_custom_generator() {
    struct Prefixed;
    impl AtomicGenerator for Prefixed {
        fn generate(&self, style: &StyleObject) -> Vec<AtomicStyle> {
            AtomicCss
                .generate(style)
                .into_iter()
                .map(|mut atomic| {
                    atomic.identifier = format!("app{}", atomic.identifier);
                    atomic
                })
                .collect()
        }
    }

    let registry = RuleRegistry::new();
    let out = split_styles(
        &obj(json!({"$sm": {"color": "red"}})),
        &StaticConfig::default(),
        &theme(),
        &media(),
        Target::Web {
            generator: &Prefixed,
            registry: &registry,
        },
    );
    let names = out.class_names.unwrap();
    assert!(names[0].starts_with("app_color-"));
}

// ---------------------------------------------------------------------------
// Native target
// ---------------------------------------------------------------------------

#[test]
fn test_native_media_toggle_only_changes_style() {
    let state = MediaState::new();
    let props = json!({"padding": 4, "$sm": {"padding": 2}, "hoverStyle": {"opacity": 0.5}, "testID": "x"});

    state.update_viewport(&media(), 1024.0, 768.0);
    let wide = split_native(props.clone(), &state);

    state.update_viewport(&media(), 640.0, 768.0);
    let narrow = split_native(props, &state);

    assert_eq!(wide.style, vec![obj(json!({"padding": 4}))]);
    assert_eq!(
        narrow.style,
        vec![obj(json!({"padding": 4})), obj(json!({"padding": 2}))]
    );
    assert_eq!(wide.view_props, narrow.view_props);
    assert_eq!(wide.pseudos, narrow.pseudos);
    assert_eq!(wide.class_names, narrow.class_names);
    assert!(narrow.class_names.is_none());
}

#[test]
fn test_native_split_snapshot() {
    let state = MediaState::new();
    state.set("sm", true);
    let out = split_native(
        json!({
            "backgroundColor": "$bg",
            "hoverStyle": {"opacity": 0.8},
            "$sm": {"padding": 4},
            "testID": "card"
        }),
        &state,
    );
    let rendered = serde_json::to_string_pretty(&out).unwrap();
    insta::assert_snapshot!(rendered, @r###"
    {
      "viewProps": {
        "testID": "card"
      },
      "style": [
        {
          "backgroundColor": "#fff"
        },
        {
          "padding": 4
        }
      ],
      "pseudos": {
        "hoverStyle": {
          "opacity": 0.8
        }
      },
      "classNames": null
    }
    "###);
}

// ---------------------------------------------------------------------------
// Configured component
// ---------------------------------------------------------------------------

#[test]
fn test_variants_defaults_and_tokens() {
    let config = button_config();
    let props = config.with_defaults(&obj(json!({
        "size": 44,
        "disabled": true,
        "onPress": "submit"
    })));
    let out = split_styles(
        &props,
        &config,
        &theme(),
        &media(),
        Target::native(&MediaState::new()),
    );
    assert_eq!(
        out.style,
        vec![obj(json!({"backgroundColor": "#fff", "height": 44, "opacity": 0.5}))]
    );
    assert_eq!(out.view_props, obj(json!({"onPress": "submit"})));
}

#[test]
fn test_custom_mapper_fans_out() {
    let config = StaticConfig::builder()
        .prop_mapper(|key: &str, value: &Value, _: &Theme, _: &PropBag| match key {
            "inset" => MappedProp::Expanded(obj(json!({
                "top": value, "right": value, "bottom": value, "left": value
            }))),
            _ => MappedProp::PassThrough,
        })
        .build()
        .unwrap();
    let out = split_styles(
        &obj(json!({"position": "absolute", "inset": 0})),
        &config,
        &Theme::new(),
        &media(),
        Target::native(&MediaState::new()),
    );
    assert_eq!(
        out.style,
        vec![obj(json!({
            "position": "absolute",
            "top": 0,
            "right": 0,
            "bottom": 0,
            "left": 0
        }))]
    );
}

#[test]
fn test_media_config_queries() {
    let media = media();
    assert_eq!(media.get("gtSm"), Some(&MediaQuery::new().min_width(801.0)));
    assert_eq!(media.priority("tall"), Some(3));
}
