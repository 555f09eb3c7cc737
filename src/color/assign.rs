use crate::{
    color::hsl::{Hsl, Rgb8},
    foundation::error::{TagbloomError, TagbloomResult},
    foundation::hash::rolling_hash31,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Target saturation/lightness band for generated colors, both in percent.
///
/// Ranges are half-open: the derived value lands in `[min, max)`, or exactly `min`
/// when `min == max`.
pub struct ColorBand {
    /// `[min, max]` saturation.
    #[serde(alias = "saturationRange")]
    pub saturation_range: [u32; 2],
    /// `[min, max]` lightness.
    #[serde(alias = "lightnessRange")]
    pub lightness_range: [u32; 2],
}

impl ColorBand {
    /// Bright, mid-lightness colors for light card backgrounds.
    pub const LIGHT_CARD: Self = Self {
        saturation_range: [60, 90],
        lightness_range: [45, 65],
    };

    /// Darker colors for badges carrying light text.
    pub const DARK_BADGE: Self = Self {
        saturation_range: [65, 90],
        lightness_range: [25, 45],
    };

    /// Look up a named preset (`light_card` / `dark_badge`, `-` accepted for `_`).
    pub fn preset(name: &str) -> TagbloomResult<Self> {
        match name.trim().replace('-', "_").as_str() {
            "light_card" => Ok(Self::LIGHT_CARD),
            "dark_badge" => Ok(Self::DARK_BADGE),
            other => Err(TagbloomError::validation(format!(
                "unknown color band preset '{other}'"
            ))),
        }
    }

    /// Validate `min <= max <= 100` for both ranges.
    pub fn validate(&self) -> TagbloomResult<()> {
        for (name, [min, max]) in [
            ("saturation_range", self.saturation_range),
            ("lightness_range", self.lightness_range),
        ] {
            if min > max {
                return Err(TagbloomError::validation(format!(
                    "{name} min must be <= max"
                )));
            }
            if max > 100 {
                return Err(TagbloomError::validation(format!(
                    "{name} max must be <= 100"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ColorBand {
    fn default() -> Self {
        Self::LIGHT_CARD
    }
}

fn pick_in_band(magnitude: u32, [min, max]: [u32; 2]) -> u32 {
    let width = max.saturating_sub(min);
    if width == 0 {
        min
    } else {
        min + magnitude % width
    }
}

/// Maps tag strings to deterministic display colors.
///
/// The tag is hashed with [`rolling_hash31`]; `|hash| mod 360` picks the hue and the
/// same magnitude picks saturation and lightness inside the configured [`ColorBand`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagColorAssigner {
    band: ColorBand,
}

impl TagColorAssigner {
    /// Assigner producing colors inside `band`.
    pub fn new(band: ColorBand) -> Self {
        Self { band }
    }

    /// Active band.
    pub fn band(&self) -> ColorBand {
        self.band
    }

    /// HSL triple for `tag`. The empty tag hashes to 0 and gets hue 0 at the band minimums.
    pub fn hsl_for(&self, tag: &str) -> Hsl {
        let magnitude = rolling_hash31(tag).unsigned_abs();
        Hsl::new(
            f64::from(magnitude % 360),
            f64::from(pick_in_band(magnitude, self.band.saturation_range)),
            f64::from(pick_in_band(magnitude, self.band.lightness_range)),
        )
    }

    /// Display color for `tag`.
    pub fn color_for(&self, tag: &str) -> Rgb8 {
        self.hsl_for(tag).to_rgb8()
    }

    /// `#rrggbb` for `tag`.
    pub fn hex_for(&self, tag: &str) -> String {
        self.color_for(tag).to_hex()
    }

    /// Colors for several tags, in input order.
    pub fn colors_for<'a, I>(&self, tags: I) -> Vec<(String, Rgb8)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter()
            .map(|tag| (tag.to_string(), self.color_for(tag)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/assign.rs"]
mod tests;
