//! Tag colors.
//!
//! A tag's color is a pure function of its text: hash, map into an HSL band, convert to sRGB.

/// Tag-to-color assignment within a saturation/lightness band.
pub mod assign;
/// HSL and 8-bit RGB color values.
pub mod hsl;
