//! # propstyle
//!
//! Resolves a flat bag of component props into what a renderer needs: view
//! props to forward, ordered inline style objects, pseudo-state styles, and on
//! the web, atomic class names for media-scoped styles.
//!
//! Authors write style values directly as props (`padding`, `x`, `hoverStyle`,
//! `$sm`); the splitter classifies each one against a per-component
//! [`StaticConfig`](config::StaticConfig) and routes it.
//!
//! ## Core Systems
//!
//! - **[`split`]**: The prop splitter: classification, normalization, sub-styles
//! - **[`config`]**: Static component configuration and the prop-mapper seam
//! - **[`mapper`]**: Default prop mapper: variants, shorthands, theme tokens
//! - **[`style`]**: Valid style keys, transform merging, shadow fix-up
//! - **[`media`]**: Media queries, the condition registry, live media state
//! - **[`css`]**: Atomic CSS generation, media-scoped rules, rule registry
//! - **[`theme`]**: Theme tokens
//! - **[`value`]**: Prop and style value model
//!
//! ## Example
//!
//! ```
//! use propstyle::config::StaticConfig;
//! use propstyle::media::{MediaQuery, MediaQueryConfig, MediaState};
//! use propstyle::split::{split_styles, Target};
//! use propstyle::theme::Theme;
//! use propstyle::value::json;
//!
//! let props = json!({"padding": 10, "x": 4, "onPress": "submit"});
//! let media = MediaQueryConfig::new().with("sm", MediaQuery::new().max_width(800.0));
//! let state = MediaState::new();
//!
//! let out = split_styles(
//!     props.as_object().unwrap(),
//!     &StaticConfig::default(),
//!     &Theme::new(),
//!     &media,
//!     Target::native(&state),
//! );
//!
//! assert_eq!(out.style.len(), 1);
//! assert_eq!(out.view_props.get("onPress"), Some(&json!("submit")));
//! ```

// Foundation
pub mod value;
pub mod theme;

// Style primitives
pub mod style;

// Configuration
pub mod config;
pub mod mapper;

// Responsive conditions
pub mod media;

// Web output
pub mod css;

// Splitter
pub mod split;

pub use config::{MappedProp, PropMapper, StaticConfig, Variant};
pub use split::{split_styles, SplitStyles, Splitter, Target};
