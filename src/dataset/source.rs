use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    dataset::model::{Dataset, parse_dataset_list},
    foundation::error::{TagbloomError, TagbloomResult},
};

/// Site-relative location of the dataset list.
pub const DEFAULT_DATA_PATH: &str = "/assets/data/temp-datasets.json";

/// Somewhere a dataset list can be fetched from.
pub trait DatasetSource: Send + Sync {
    /// Short human description for logs.
    fn describe(&self) -> String;

    /// Fetch and parse the full list.
    fn fetch(&self) -> TagbloomResult<Vec<Dataset>>;
}

impl<T: DatasetSource + ?Sized> DatasetSource for std::sync::Arc<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> TagbloomResult<Vec<Dataset>> {
        (**self).fetch()
    }
}

/// Dataset list stored as a JSON file on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading `path` directly.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source for a site-relative data path (as used in page URLs) under `site_root`.
    pub fn under_site_root(site_root: impl AsRef<Path>, data_path: &str) -> TagbloomResult<Self> {
        let rel = normalize_site_path(data_path)?;
        Ok(Self::new(site_root.as_ref().join(rel)))
    }

    /// File this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }

    fn fetch(&self) -> TagbloomResult<Vec<Dataset>> {
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read dataset list from '{}'", self.path.display()))?;
        parse_dataset_list(&json)
    }
}

/// Fixed in-memory dataset list.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    datasets: Vec<Dataset>,
}

impl StaticSource {
    /// Source always returning `datasets`.
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self { datasets }
    }
}

impl DatasetSource for StaticSource {
    fn describe(&self) -> String {
        format!("static list of {}", self.datasets.len())
    }

    fn fetch(&self) -> TagbloomResult<Vec<Dataset>> {
        Ok(self.datasets.clone())
    }
}

/// Normalize a site-relative path (`/a/./b.json` -> `a/b.json`).
///
/// A leading `/` means "site root", not filesystem root. `..` segments and empty
/// results are rejected.
pub fn normalize_site_path(path: &str) -> TagbloomResult<String> {
    let s = path.replace('\\', "/");
    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(TagbloomError::validation(
                "data path must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(TagbloomError::validation(
            "data path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/source.rs"]
mod tests;
