//! Dataset records, where they come from, and the cache in front of them.

/// Cached dataset access, lookups and statistics.
pub mod cache;
/// Dataset records as stored in the site's JSON list.
pub mod model;
/// Places a dataset list can be read from.
pub mod source;
