//! Timeline caching.
//!
//! This module provides disk-based caching of raw timeline responses with
//! TTL-based invalidation driven by file modification times.

pub mod freshness;
pub mod store;

pub use freshness::{age_at, format_duration, Freshness};
pub use store::{CacheStore, EntryInfo};

/// Get the default cache directory.
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("timeline-cache")
}
