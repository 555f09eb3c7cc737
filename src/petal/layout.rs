use crate::{
    color::assign::TagColorAssigner,
    color::hsl::Rgb8,
    foundation::error::{TagbloomError, TagbloomResult},
};

/// Default cap on rendered petals.
pub const DEFAULT_MAX_PETALS: usize = 10;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One wedge of the radial icon, derived per render and never persisted.
pub struct PetalSpec {
    /// Tag this petal represents.
    pub tag: String,
    /// Rotation about the petal apex, in degrees; negative leans left.
    pub angle_degrees: f64,
    /// Tag color, used at the bottom of the gradient.
    pub base_color: Rgb8,
    /// Lightened tag color, used at the top of the gradient.
    pub top_color: Rgb8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Petals plus the parameters shared by all of them.
pub struct PetalGeometry {
    /// Petals in input tag order.
    pub petals: Vec<PetalSpec>,
    /// Total angular span in degrees (0 for fewer than two petals).
    pub span_degrees: f64,
    /// Angle between adjacent petals (0 for fewer than two petals).
    pub step_degrees: f64,
    /// Horizontal control-point offset of the petal outline.
    pub ctrl_x: f64,
    /// Lightness points added to form each top color.
    pub lighten_delta: f64,
    /// Tags dropped by truncation.
    pub dropped: usize,
}

impl PetalGeometry {
    /// True when there is nothing to draw and a placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        self.petals.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunables of the petal arrangement.
///
/// Span grows linearly past three petals and is hard-capped so that large tag
/// lists do not wrap all the way around the apex.
pub struct PetalLayout {
    /// Tags beyond this count are dropped.
    pub max_petals: usize,
    /// Span for two or three petals.
    pub base_span_deg: f64,
    /// Span added per petal beyond three.
    pub span_step_deg: f64,
    /// Upper bound on the span.
    pub max_span_deg: f64,
    /// Outline control-point offset for up to six petals.
    pub base_ctrl_x: f64,
    /// Floor for the shrinking control-point offset.
    pub min_ctrl_x: f64,
    /// Lightening applied to a single petal.
    pub base_lighten: f64,
    /// Extra lightening per additional petal.
    pub lighten_step: f64,
    /// Upper bound on lightening.
    pub max_lighten: f64,
}

impl Default for PetalLayout {
    fn default() -> Self {
        Self {
            max_petals: DEFAULT_MAX_PETALS,
            base_span_deg: 70.0,
            span_step_deg: 25.0,
            max_span_deg: 300.0,
            base_ctrl_x: 32.0,
            min_ctrl_x: 14.0,
            base_lighten: 12.0,
            lighten_step: 0.6,
            max_lighten: 20.0,
        }
    }
}

impl PetalLayout {
    /// Default tunables with a different petal cap.
    pub fn with_max_petals(max_petals: usize) -> Self {
        Self {
            max_petals,
            ..Self::default()
        }
    }

    /// Reject non-finite or negative tunables.
    pub fn validate(&self) -> TagbloomResult<()> {
        let fields = [
            ("base_span_deg", self.base_span_deg),
            ("span_step_deg", self.span_step_deg),
            ("max_span_deg", self.max_span_deg),
            ("base_ctrl_x", self.base_ctrl_x),
            ("min_ctrl_x", self.min_ctrl_x),
            ("base_lighten", self.base_lighten),
            ("lighten_step", self.lighten_step),
            ("max_lighten", self.max_lighten),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(TagbloomError::validation(format!(
                    "petal {name} must be finite and >= 0"
                )));
            }
        }
        if self.max_span_deg > 360.0 {
            return Err(TagbloomError::validation(
                "petal max_span_deg must be <= 360",
            ));
        }
        Ok(())
    }

    /// Total span for `n` petals.
    pub fn span_for(&self, n: usize) -> f64 {
        match n {
            0 | 1 => 0.0,
            2 | 3 => self.base_span_deg,
            _ => (self.base_span_deg + (n - 3) as f64 * self.span_step_deg).min(self.max_span_deg),
        }
    }

    /// Petal angles for `n` petals, symmetric around 0.
    pub fn angles(&self, n: usize) -> Vec<f64> {
        if n < 2 {
            return vec![0.0; n];
        }
        let span = self.span_for(n);
        let step = span / (n - 1) as f64;
        let start = -span / 2.0;
        (0..n).map(|i| start + step * i as f64).collect()
    }

    /// Outline control-point offset; narrows past six petals.
    pub fn ctrl_x_for(&self, n: usize) -> f64 {
        if n > 6 {
            (self.base_ctrl_x * 6.0 / n as f64).max(self.min_ctrl_x)
        } else {
            self.base_ctrl_x
        }
    }

    /// Lightness points added to the top-of-gradient color.
    pub fn lighten_for(&self, n: usize) -> f64 {
        let extra = n.saturating_sub(1) as f64 * self.lighten_step;
        (self.base_lighten + extra).min(self.max_lighten)
    }

    /// Arrange the first `max_petals` tags, coloring each with `assigner`.
    pub fn arrange<S: AsRef<str>>(&self, tags: &[S], assigner: &TagColorAssigner) -> PetalGeometry {
        let kept = &tags[..tags.len().min(self.max_petals)];
        let n = kept.len();
        let span_degrees = self.span_for(n);
        let step_degrees = if n < 2 {
            0.0
        } else {
            span_degrees / (n - 1) as f64
        };
        let lighten_delta = self.lighten_for(n);

        let petals = kept
            .iter()
            .zip(self.angles(n))
            .map(|(tag, angle_degrees)| {
                let tag = tag.as_ref();
                let base_color = assigner.color_for(tag);
                let top_color = base_color.to_hsl().lighten(lighten_delta).to_rgb8();
                PetalSpec {
                    tag: tag.to_string(),
                    angle_degrees,
                    base_color,
                    top_color,
                }
            })
            .collect();

        PetalGeometry {
            petals,
            span_degrees,
            step_degrees,
            ctrl_x: self.ctrl_x_for(n),
            lighten_delta,
            dropped: tags.len() - n,
        }
    }
}

/// Petals for `tags` with default tunables and default colors, capped at `max_petals`.
pub fn layout<S: AsRef<str>>(tags: &[S], max_petals: usize) -> Vec<PetalSpec> {
    PetalLayout::with_max_petals(max_petals)
        .arrange(tags, &TagColorAssigner::default())
        .petals
}

#[cfg(test)]
#[path = "../../tests/unit/petal/layout.rs"]
mod tests;
