//! JSON site configuration.
//!
//! Every field has a default, so `{}` is a valid configuration that reproduces the
//! stock look: light-card colors, ten petals, 48px icons and 300px tiles.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    color::assign::{ColorBand, TagColorAssigner},
    dataset::cache::DatasetCache,
    dataset::source::{DEFAULT_DATA_PATH, FileSource, normalize_site_path},
    foundation::error::{TagbloomError, TagbloomResult},
    petal::layout::PetalLayout,
    petal::shape::PetalShape,
    render::card::{CardOptions, DatasetCardRenderer},
    render::svg::{IconStyle, PetalIconRenderer},
    render::tile::{DEFAULT_TILE_SIZE, TileGrid},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Everything needed to build the site's renderers and dataset cache.
pub struct SiteConfig {
    /// Directory the site is served from. Relative paths resolve against the config file.
    pub site_root: PathBuf,
    /// Site-relative path of the dataset list.
    pub data_path: String,
    /// Dataset cache freshness window in seconds.
    pub cache_ttl_secs: u64,
    /// Saturation/lightness band for tag colors.
    pub color_band: ColorBand,
    /// Petal arrangement tunables.
    pub petals: PetalLayout,
    /// Petal outline.
    pub petal_shape: PetalShape,
    /// Icon presentation constants.
    pub icon_style: IconStyle,
    /// Suffix gradient ids per render so many icons can share a page.
    pub unique_gradient_ids: bool,
    /// Card switches.
    pub card: CardOptions,
    /// Background tile edge length in pixels.
    pub tile_size: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            data_path: DEFAULT_DATA_PATH.to_string(),
            cache_ttl_secs: 300,
            color_band: ColorBand::default(),
            petals: PetalLayout::default(),
            petal_shape: PetalShape::default(),
            icon_style: IconStyle::default(),
            unique_gradient_ids: false,
            card: CardOptions::default(),
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl SiteConfig {
    /// Parse from a JSON reader and validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> TagbloomResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TagbloomError::validation(format!("parse site config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a JSON file; a relative `site_root` is taken relative to the file.
    pub fn from_path(path: impl AsRef<Path>) -> TagbloomResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TagbloomError::validation(format!("open site config '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if cfg.site_root.is_relative()
            && let Some(dir) = path.parent()
        {
            cfg.site_root = dir.join(&cfg.site_root);
        }
        Ok(cfg)
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> TagbloomResult<()> {
        normalize_site_path(&self.data_path)?;
        if self.cache_ttl_secs == 0 {
            return Err(TagbloomError::validation("cache_ttl_secs must be > 0"));
        }
        if self.tile_size == 0 {
            return Err(TagbloomError::validation("tile_size must be > 0"));
        }
        self.color_band.validate()?;
        self.petals.validate()?;
        let s = &self.icon_style;
        for (name, v) in [
            ("opacity_top", s.opacity_top),
            ("opacity_bottom", s.opacity_bottom),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(TagbloomError::validation(format!(
                    "icon_style {name} must be in [0, 1]"
                )));
            }
        }
        if !s.scale.is_finite() || s.scale <= 0.0 {
            return Err(TagbloomError::validation(
                "icon_style scale must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Tag color assigner for the configured band.
    pub fn assigner(&self) -> TagColorAssigner {
        TagColorAssigner::new(self.color_band)
    }

    /// Petal icon renderer.
    pub fn icon_renderer(&self) -> PetalIconRenderer {
        PetalIconRenderer::new(self.assigner(), self.petals)
            .with_shape(self.petal_shape)
            .with_style(self.icon_style)
            .with_unique_ids(self.unique_gradient_ids)
    }

    /// Card renderer.
    pub fn card_renderer(&self) -> DatasetCardRenderer {
        DatasetCardRenderer::new(self.card.clone(), self.icon_renderer())
    }

    /// Background tile grid.
    pub fn tile_grid(&self) -> TagbloomResult<TileGrid> {
        TileGrid::new(self.tile_size)
    }

    /// File source for the dataset list.
    pub fn dataset_source(&self) -> TagbloomResult<FileSource> {
        FileSource::under_site_root(&self.site_root, &self.data_path)
    }

    /// Dataset cache over [`Self::dataset_source`].
    pub fn dataset_cache(&self) -> TagbloomResult<DatasetCache<FileSource>> {
        let ttl = Duration::from_secs(self.cache_ttl_secs);
        Ok(DatasetCache::with_clock(
            self.dataset_source()?,
            crate::dataset::cache::SystemClock,
            ttl,
        ))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
