use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;

use crate::{
    color::assign::TagColorAssigner,
    color::hsl::Rgb8,
    foundation::core::IconSize,
    foundation::error::{TagbloomError, TagbloomResult},
    foundation::hash::fnv1a32,
    petal::layout::{PetalGeometry, PetalLayout},
    petal::shape::PetalShape,
    render::markup::{escape_html, num},
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Presentation constants of the petal icon.
pub struct IconStyle {
    /// Uniform scale applied to the petal group.
    pub scale: f64,
    /// Vertical shift applied to the petal group before scaling.
    pub translate_y: f64,
    /// Gradient opacity at the petal tip.
    pub opacity_top: f64,
    /// Gradient opacity at the petal apex.
    pub opacity_bottom: f64,
    /// Fill of the placeholder disc shown for tagless datasets.
    pub placeholder_fill: Rgb8,
    /// Radius of the placeholder disc in a 100-unit viewBox.
    pub placeholder_radius: f64,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            scale: 0.82,
            translate_y: -4.0,
            opacity_top: 0.85,
            opacity_bottom: 0.05,
            placeholder_fill: Rgb8::new(0xe2, 0xe8, 0xf0),
            placeholder_radius: 46.0,
        }
    }
}

/// Builds petal icon SVG markup from tag lists.
///
/// Gradient ids are `g_{fnv1a32(tag)}_{index}`. With [`Self::with_unique_ids`] every
/// render appends `_{n}` from a per-renderer counter so several icons can share one
/// HTML document. Ids never influence colors or angles.
#[derive(Debug, Default)]
pub struct PetalIconRenderer {
    assigner: TagColorAssigner,
    layout: PetalLayout,
    shape: PetalShape,
    style: IconStyle,
    unique_ids: bool,
    renders: AtomicU64,
}

impl PetalIconRenderer {
    /// Renderer with the given colors and layout, default shape and style.
    pub fn new(assigner: TagColorAssigner, layout: PetalLayout) -> Self {
        Self {
            assigner,
            layout,
            ..Self::default()
        }
    }

    /// Replace the petal outline.
    pub fn with_shape(mut self, shape: PetalShape) -> Self {
        self.shape = shape;
        self
    }

    /// Replace presentation constants.
    pub fn with_style(mut self, style: IconStyle) -> Self {
        self.style = style;
        self
    }

    /// Suffix gradient ids with a per-render counter.
    pub fn with_unique_ids(mut self, on: bool) -> Self {
        self.unique_ids = on;
        self
    }

    /// Layout tunables in use.
    pub fn layout(&self) -> &PetalLayout {
        &self.layout
    }

    /// Color assigner in use.
    pub fn assigner(&self) -> &TagColorAssigner {
        &self.assigner
    }

    /// Icon for `tags`; the placeholder when there are none.
    pub fn render<S: AsRef<str>>(&self, tags: &[S], size: IconSize) -> String {
        let geo = self.layout.arrange(tags, &self.assigner);
        self.render_geometry(&geo, size)
    }

    /// Icon for precomputed geometry.
    pub fn render_geometry(&self, geo: &PetalGeometry, size: IconSize) -> String {
        if geo.is_empty() {
            return self.placeholder(size);
        }

        let suffix = if self.unique_ids {
            format!("_{}", self.renders.fetch_add(1, Ordering::Relaxed))
        } else {
            String::new()
        };
        let d = self.shape.outline(geo.ctrl_x).to_svg();
        let apex_y = num(self.shape.apex_y);

        let mut defs = String::new();
        let mut petals = String::new();
        for (i, p) in geo.petals.iter().enumerate() {
            let id = format!("g_{}_{i}{suffix}", fnv1a32(&p.tag));
            defs.push_str(&format!(
                r#"<linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{top}" stop-opacity="{o0}"/><stop offset="100%" stop-color="{base}" stop-opacity="{o1}"/></linearGradient>"#,
                top = p.top_color,
                base = p.base_color,
                o0 = num(self.style.opacity_top),
                o1 = num(self.style.opacity_bottom),
            ));
            petals.push_str(&format!(
                r#"<path d="{d}" fill="url(#{id})" transform="rotate({angle} 0 {apex_y})" style="mix-blend-mode:multiply"/>"#,
                angle = num(p.angle_degrees),
            ));
        }

        let label = geo
            .petals
            .iter()
            .map(|p| p.tag.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let px = size.px();
        format!(
            r#"<svg class="dataset-card__icon dataset-card__icon--svg" xmlns="{SVG_NS}" width="{px}" height="{px}" viewBox="-50 0 100 100" role="img" aria-label="Tags: {label}"><defs>{defs}</defs><g transform="scale({scale}) translate(0,{ty})">{petals}</g></svg>"#,
            label = escape_html(&label),
            scale = num(self.style.scale),
            ty = num(self.style.translate_y),
        )
    }

    /// Neutral disc shown when a dataset has no tags.
    pub fn placeholder(&self, size: IconSize) -> String {
        let px = size.px();
        format!(
            r#"<svg class="dataset-card__icon" xmlns="{SVG_NS}" width="{px}" height="{px}" viewBox="0 0 100 100"><circle cx="50" cy="50" r="{r}" fill="{fill}"/></svg>"#,
            r = num(self.style.placeholder_radius),
            fill = self.style.placeholder_fill,
        )
    }
}

/// Parse SVG markup into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> TagbloomResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize SVG markup into a straight-alpha RGBA image of `size` x `size` pixels.
pub fn rasterize_svg(svg: &str, size: IconSize) -> TagbloomResult<image::RgbaImage> {
    let tree = parse_svg(svg.as_bytes())?;
    let px = size.px();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(px, px)
        .ok_or_else(|| TagbloomError::render(format!("cannot allocate {px}x{px} pixmap")))?;

    let tree_size = tree.size();
    let transform = resvg::tiny_skia::Transform::from_scale(
        px as f32 / tree_size.width(),
        px as f32 / tree_size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut rgba = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(px, px, rgba)
        .ok_or_else(|| TagbloomError::render("pixmap size does not match image size"))
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
