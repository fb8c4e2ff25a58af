//! Responsive conditions: query definitions, the recognized-condition
//! registry, and the live state read on native targets.

pub mod config;
pub mod query;
pub mod state;

pub use config::MediaQueryConfig;
pub use query::{MediaQuery, MediaQueryError};
pub use state::MediaState;

/// First character of a media-scoped prop key (`$sm`).
pub const MEDIA_PREFIX: char = '$';

/// Separator between an atomic identifier and its media key.
pub const MEDIA_SEP: char = '_';
