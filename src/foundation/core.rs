use crate::foundation::error::{TagbloomError, TagbloomResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// Pixel size of the area tiles are laid over (typically the browser window).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
}

impl Viewport {
    /// Build a viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Square icon edge length in pixels; must be > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct IconSize(u32);

impl IconSize {
    /// Size used when nothing is configured.
    pub const DEFAULT: Self = Self(48);

    /// Validate and wrap a pixel size.
    pub fn new(px: u32) -> TagbloomResult<Self> {
        if px == 0 {
            return Err(TagbloomError::validation("icon size must be > 0"));
        }
        Ok(Self(px))
    }

    /// Pixel edge length.
    pub fn px(self) -> u32 {
        self.0
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for IconSize {
    type Error = TagbloomError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IconSize> for u32 {
    fn from(value: IconSize) -> Self {
        value.0
    }
}
