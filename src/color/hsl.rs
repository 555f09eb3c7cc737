use std::fmt;

use crate::foundation::error::{TagbloomError, TagbloomResult};

/// Hue/saturation/lightness triple: `h` in degrees `[0, 360)`, `s` and `l` in percent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent `[0, 100]`.
    pub s: f64,
    /// Lightness in percent `[0, 100]`.
    pub l: f64,
}

impl Hsl {
    /// Build an HSL triple.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert with the sector formulation
    /// `f(n) = l - a * max(-1, min(k(n) - 3, 9 - k(n), 1))`, channels at n = 0, 8, 4.
    pub fn to_rgb8(self) -> Rgb8 {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let a = s * l.min(1.0 - l);
        let f = |n: f64| {
            let k = (n + self.h / 30.0).rem_euclid(12.0);
            let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            channel_u8(c)
        };
        Rgb8::new(f(0.0), f(8.0), f(4.0))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_rgb8().to_hex()
    }

    /// Raise lightness by `delta` percentage points, capped at 100.
    pub fn lighten(self, delta: f64) -> Self {
        Self {
            l: (self.l + delta).min(100.0),
            ..self
        }
    }
}

fn channel_u8(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Opaque 8-bit RGB color; serializes as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> TagbloomResult<Self> {
        let raw = s.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TagbloomError::validation(format!("color '{s}' is not hex")));
        }
        let digits = match hex.len() {
            6 => hex.to_string(),
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            _ => {
                return Err(TagbloomError::validation(format!(
                    "color '{s}' must be #rrggbb or #rgb"
                )));
            }
        };
        let byte = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|p| u8::from_str_radix(p, 16).ok())
                .ok_or_else(|| TagbloomError::validation(format!("color '{s}' is not hex")))
        };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }

    /// Convert to HSL without rounding.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = TagbloomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
