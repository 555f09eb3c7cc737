use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use crate::{
    color::assign::TagColorAssigner,
    dataset::model::Dataset,
    dataset::source::DatasetSource,
    foundation::error::TagbloomResult,
};

/// How long a loaded list stays fresh unless configured otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Time source for cache freshness checks.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Options for [`DatasetCache::load_with`].
pub struct LoadOptions {
    /// Ignore a fresh cache and fetch again.
    pub force_reload: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a tag filter combines its tags.
pub enum TagMatch {
    /// Dataset carries at least one of the tags.
    #[default]
    Any,
    /// Dataset carries every one of the tags.
    All,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Snapshot of cache state, for diagnostics.
pub struct CacheInfo {
    /// A list is held.
    pub has_cache: bool,
    /// Time since the held list was loaded.
    pub age: Option<Duration>,
    /// The held list is still fresh.
    pub is_valid: bool,
    /// Number of held datasets.
    pub dataset_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Occurrences of one tag across the list.
pub struct TagCount {
    /// Tag id.
    pub tag: String,
    /// Number of datasets carrying it.
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Aggregate tag usage over the dataset list.
pub struct DatasetStatistics {
    /// Number of datasets.
    pub total_datasets: usize,
    /// Per-tag counts in order of first appearance.
    pub tag_counts: Vec<TagCount>,
    /// Up to [`DatasetStatistics::TOP_N`] tags by descending count; ties keep first appearance.
    pub most_common_tags: Vec<TagCount>,
}

impl DatasetStatistics {
    /// Length of `most_common_tags`.
    pub const TOP_N: usize = 10;

    /// Count tag usage over `datasets`.
    pub fn compute(datasets: &[Dataset]) -> Self {
        let mut index = HashMap::<&str, usize>::new();
        let mut tag_counts = Vec::<TagCount>::new();
        for tag in datasets.iter().flat_map(Dataset::tag_ids) {
            match index.get(tag) {
                Some(&i) => tag_counts[i].count += 1,
                None => {
                    index.insert(tag, tag_counts.len());
                    tag_counts.push(TagCount {
                        tag: tag.to_string(),
                        count: 1,
                    });
                }
            }
        }

        let mut most_common_tags = tag_counts.clone();
        // Stable sort keeps first-appearance order among equal counts.
        most_common_tags.sort_by(|a, b| b.count.cmp(&a.count));
        most_common_tags.truncate(Self::TOP_N);

        Self {
            total_datasets: datasets.len(),
            tag_counts,
            most_common_tags,
        }
    }
}

#[derive(Debug, Default)]
struct CacheState {
    datasets: Option<Arc<Vec<Dataset>>>,
    loaded_at: Option<Instant>,
    // Bumped on every successful load.
    generation: u64,
}

/// Time-stamped cache in front of a [`DatasetSource`].
///
/// At most one fetch runs at a time. Callers that find the cache stale while a
/// fetch is running wait for it and share its result instead of fetching again.
/// A failed fetch leaves the previous contents untouched.
pub struct DatasetCache<S, C = SystemClock> {
    source: S,
    clock: C,
    ttl: Duration,
    state: Mutex<CacheState>,
    in_flight: Mutex<()>,
}

impl<S: DatasetSource> DatasetCache<S> {
    /// Cache over `source` with the default freshness window.
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock, DEFAULT_TTL)
    }
}

impl<S: DatasetSource, C: Clock> DatasetCache<S, C> {
    /// Cache with an explicit clock and freshness window.
    pub fn with_clock(source: S, clock: C, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            state: Mutex::new(CacheState::default()),
            in_flight: Mutex::new(()),
        }
    }

    /// Freshness window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh(&self, st: &CacheState) -> Option<Arc<Vec<Dataset>>> {
        let loaded_at = st.loaded_at?;
        let datasets = st.datasets.as_ref()?;
        (self.clock.now().saturating_duration_since(loaded_at) < self.ttl)
            .then(|| Arc::clone(datasets))
    }

    /// Load the list, serving from cache while fresh.
    pub fn load(&self) -> TagbloomResult<Arc<Vec<Dataset>>> {
        self.load_with(LoadOptions::default())
    }

    /// Load the list with explicit options.
    #[tracing::instrument(skip(self), fields(source = %self.source.describe()))]
    pub fn load_with(&self, opts: LoadOptions) -> TagbloomResult<Arc<Vec<Dataset>>> {
        let seen_generation = {
            let st = self.state();
            if !opts.force_reload
                && let Some(hit) = self.fresh(&st)
            {
                tracing::debug!(count = hit.len(), "dataset cache hit");
                return Ok(hit);
            }
            st.generation
        };

        let _in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        {
            let st = self.state();
            if !opts.force_reload
                && st.generation != seen_generation
                && let Some(done) = &st.datasets
            {
                tracing::debug!("joined concurrent dataset load");
                return Ok(Arc::clone(done));
            }
        }

        tracing::debug!("fetching dataset list");
        let datasets = match self.source.fetch() {
            Ok(d) => Arc::new(d),
            Err(err) => {
                tracing::error!(error = %err, "failed to load datasets");
                return Err(err);
            }
        };

        let mut st = self.state();
        st.datasets = Some(Arc::clone(&datasets));
        st.loaded_at = Some(self.clock.now());
        st.generation += 1;
        tracing::debug!(count = datasets.len(), "dataset list cached");
        Ok(datasets)
    }

    /// Drop the held list; the next load fetches.
    pub fn clear(&self) {
        let mut st = self.state();
        st.datasets = None;
        st.loaded_at = None;
    }

    /// Current cache state.
    pub fn info(&self) -> CacheInfo {
        let st = self.state();
        CacheInfo {
            has_cache: st.datasets.is_some(),
            age: st
                .loaded_at
                .map(|t| self.clock.now().saturating_duration_since(t)),
            is_valid: self.fresh(&st).is_some(),
            dataset_count: st.datasets.as_ref().map_or(0, |d| d.len()),
        }
    }

    /// First dataset whose id equals `id`.
    pub fn find_by_id(&self, id: &str) -> TagbloomResult<Option<Dataset>> {
        let datasets = self.load()?;
        Ok(datasets.iter().find(|d| d.id() == Some(id)).cloned())
    }

    /// Datasets for `ids`, in request order; unknown ids are skipped.
    ///
    /// When several datasets share an id the last one wins.
    pub fn find_by_ids(&self, ids: &[&str]) -> TagbloomResult<Vec<Dataset>> {
        let datasets = self.load()?;
        let by_id: HashMap<&str, &Dataset> = datasets
            .iter()
            .filter_map(|d| Some((d.id()?, d)))
            .collect();
        Ok(ids
            .iter()
            .filter_map(|id| by_id.get(id).map(|d| (*d).clone()))
            .collect())
    }

    /// Datasets matching `tags` under `mode`. Datasets without tags never match.
    pub fn filter_by_tags(&self, tags: &[&str], mode: TagMatch) -> TagbloomResult<Vec<Dataset>> {
        let datasets = self.load()?;
        Ok(datasets
            .iter()
            .filter(|d| !d.tag_ids().is_empty())
            .filter(|d| match mode {
                TagMatch::Any => tags.iter().any(|t| d.has_tag(t)),
                TagMatch::All => tags.iter().all(|t| d.has_tag(t)),
            })
            .cloned()
            .collect())
    }

    /// Tag usage statistics.
    pub fn statistics(&self) -> TagbloomResult<DatasetStatistics> {
        let datasets = self.load()?;
        Ok(DatasetStatistics::compute(&datasets))
    }

    /// All datasets with `tags_with_colors` filled in.
    pub fn datasets_with_colors(
        &self,
        assigner: &TagColorAssigner,
    ) -> TagbloomResult<Vec<Dataset>> {
        let datasets = self.load()?;
        Ok(datasets.iter().map(|d| d.with_tag_colors(assigner)).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/cache.rs"]
mod tests;
