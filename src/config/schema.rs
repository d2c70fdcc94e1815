//! Configuration schema.
//!
//! Every field has a default, so an empty YAML document is a valid config.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::default_cache_dir;

/// Default timeline endpoint; the identity is appended.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.twitter.com/1.1/statuses/user_timeline.json?screen_name=";

/// Default cache expiration: 1 hour.
pub const DEFAULT_EXPIRATION_SECS: u64 = 3600;

/// Default number of records returned.
pub const DEFAULT_MAX_RECORDS: usize = 1;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable settings for a [`Timeline`](crate::timeline::Timeline).
///
/// # Example
///
/// ```
/// use timeline_cache::config::TimelineConfig;
///
/// let config: TimelineConfig = serde_yaml::from_str("max_records: 5").unwrap();
/// assert_eq!(config.max_records, 5);
/// assert_eq!(config.expiration_secs, 3600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Directory holding one cache file per identity. Must already exist.
    pub cache_dir: PathBuf,

    /// Seconds a cached timeline stays fresh. Zero always refetches.
    pub expiration_secs: u64,

    /// Maximum number of records returned.
    pub max_records: usize,

    /// Endpoint template. `{identity}` is replaced, otherwise appended.
    pub endpoint: String,

    /// Transport timeout in seconds.
    pub request_timeout_secs: u64,

    /// User-Agent header sent with each request.
    pub user_agent: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            expiration_secs: DEFAULT_EXPIRATION_SECS,
            max_records: DEFAULT_MAX_RECORDS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("timeline-cache/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TimelineConfig {
    /// Config using `cache_dir` and defaults for everything else.
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::default()
        }
    }

    /// Expiration window as a `Duration`.
    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration_secs)
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Values that replace file settings, from flags or the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub cache_dir: Option<PathBuf>,
    pub expiration_secs: Option<u64>,
    pub max_records: Option<usize>,
    pub endpoint: Option<String>,
}

impl ConfigOverrides {
    /// Apply every set override to `config`.
    pub fn apply(self, mut config: TimelineConfig) -> TimelineConfig {
        if let Some(dir) = self.cache_dir {
            config.cache_dir = dir;
        }
        if let Some(secs) = self.expiration_secs {
            config.expiration_secs = secs;
        }
        if let Some(max) = self.max_records {
            config.max_records = max;
        }
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        config
    }
}
