//! Markup output: petal icons, dataset cards and background tiles.

/// Dataset card HTML.
pub mod card;
pub(crate) mod markup;
/// Petal icon SVG and rasterization.
pub mod svg;
/// Background tile grid.
pub mod tile;
