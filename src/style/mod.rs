//! Style-object primitives: valid keys, transform merging, shadow fix-up.

pub mod keys;
pub mod shadow;
pub mod transform;

pub use shadow::fix_shadow;
pub use transform::merge_transform;
