//! Petal icon geometry.

/// Angles, spread and gradient colors for a tag list.
pub mod layout;
/// The single petal outline and its placement transforms.
pub mod shape;
