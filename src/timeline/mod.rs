//! Timeline retrieval.
//!
//! [`Timeline`] ties the cache store, the remote fetcher and the record
//! decoder together:
//!
//! 1. Check the cache entry's freshness
//! 2. On a miss or stale entry, fetch once and write the body through
//! 3. Decode the entry into at most `max_records` [`Record`]s
//!
//! # Example
//!
//! ```no_run
//! use timeline_cache::config::TimelineConfig;
//! use timeline_cache::timeline::Timeline;
//!
//! let timeline = Timeline::new(TimelineConfig::with_cache_dir("/var/cache/timelines")).unwrap();
//! for record in timeline.fetch_timeline("alice", None).unwrap() {
//!     println!("{}: {}", record.created_at, record.text);
//! }
//! ```

pub mod locks;
pub mod record;
pub mod service;

pub use locks::IdentityLocks;
pub use record::{decode, decode_for, Record};
pub use service::Timeline;
