//! Tagbloom turns dataset tags into deterministic colors and petal-shaped SVG icons.
//!
//! Every tag maps to one color through a fixed string hash, so the same tag looks the same
//! on every page and every run. A dataset's tags become a fan of gradient-filled petals.
//!
//! - Assign colors with [`TagColorAssigner`]
//! - Arrange petals with [`PetalLayout`] and draw them with [`PetalIconRenderer`]
//! - Load dataset lists through a [`DatasetCache`] and render them as cards or tiles
//! - Build all of the above from a [`SiteConfig`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

/// Tag colors.
pub mod color;
/// Site configuration.
pub mod config;
/// Dataset records, sources and caching.
pub mod dataset;
/// Petal icon geometry.
pub mod petal;
/// SVG and HTML output.
pub mod render;

pub use crate::foundation::core::{Affine, BezPath, IconSize, Point, Rect, Viewport};
pub use crate::foundation::error::{TagbloomError, TagbloomResult};
pub use crate::foundation::hash::{fnv1a32, rolling_hash31};

pub use crate::color::assign::{ColorBand, TagColorAssigner};
pub use crate::color::hsl::{Hsl, Rgb8};
pub use crate::config::SiteConfig;
pub use crate::dataset::cache::{
    CacheInfo, Clock, DatasetCache, DatasetStatistics, LoadOptions, SystemClock, TagCount,
    TagMatch,
};
pub use crate::dataset::model::{Dataset, LabeledTag, TagRef, TagWithColor, parse_dataset_list};
pub use crate::dataset::source::{DatasetSource, FileSource, StaticSource};
pub use crate::petal::layout::{PetalGeometry, PetalLayout, PetalSpec, layout};
pub use crate::petal::shape::PetalShape;
pub use crate::render::card::{CardOptions, DatasetCardRenderer, IconRendering};
pub use crate::render::svg::{IconStyle, PetalIconRenderer, parse_svg, rasterize_svg};
pub use crate::render::tile::{GridLayout, TileGrid, TilePlacement};
