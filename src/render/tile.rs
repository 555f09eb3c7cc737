use crate::{
    dataset::model::Dataset,
    foundation::core::Viewport,
    foundation::error::{TagbloomError, TagbloomResult},
    render::markup::escape_html,
};

/// Edge length of a background tile in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Tile counts covering a viewport.
pub struct GridLayout {
    /// Tiles per row.
    pub columns: u32,
    /// Tile rows.
    pub rows: u32,
    /// `columns * rows`.
    pub total: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Where one tile goes and which dataset it shows.
pub struct TilePlacement {
    /// Tile number, row-major.
    pub index: u32,
    /// Dataset shown; the list repeats when there are more tiles than datasets.
    pub dataset_index: usize,
    /// Left offset in pixels.
    pub x: u32,
    /// Top offset in pixels.
    pub y: u32,
}

/// Square tiling of the page background; recomputed whenever the viewport changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    tile_size: u32,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl TileGrid {
    /// Grid with `tile_size` pixel tiles.
    pub fn new(tile_size: u32) -> TagbloomResult<Self> {
        if tile_size == 0 {
            return Err(TagbloomError::validation("tile size must be > 0"));
        }
        Ok(Self { tile_size })
    }

    /// Tile edge length.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Enough whole tiles to cover `viewport`, rounding up on both axes.
    pub fn compute(&self, viewport: Viewport) -> GridLayout {
        let columns = viewport.width.div_ceil(self.tile_size);
        let rows = viewport.height.div_ceil(self.tile_size);
        GridLayout {
            columns,
            rows,
            total: columns.saturating_mul(rows),
        }
    }

    /// Row-major placements cycling through `dataset_count` datasets.
    pub fn placements(&self, viewport: Viewport, dataset_count: usize) -> Vec<TilePlacement> {
        let grid = self.compute(viewport);
        if dataset_count == 0 || grid.columns == 0 {
            return Vec::new();
        }
        (0..grid.total)
            .map(|index| TilePlacement {
                index,
                dataset_index: index as usize % dataset_count,
                x: (index % grid.columns) * self.tile_size,
                y: (index / grid.columns) * self.tile_size,
            })
            .collect()
    }

    /// Positioned `dataset-tile` fragments covering `viewport`.
    pub fn render(&self, viewport: Viewport, datasets: &[Dataset]) -> String {
        self.placements(viewport, datasets.len())
            .into_iter()
            .map(|p| render_tile(&datasets[p.dataset_index], p.x, p.y))
            .collect()
    }
}

/// One absolutely positioned tile; the description always falls back to the stock text.
pub fn render_tile(dataset: &Dataset, x: u32, y: u32) -> String {
    let description = dataset.display_description(true).unwrap_or_default();
    format!(
        r#"<div class="dataset-tile" style="left:{x}px;top:{y}px"><div class="title">{}</div><div class="description">{}</div></div>"#,
        escape_html(dataset.display_title()),
        escape_html(description)
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/tile.rs"]
mod tests;
