//! Fetch-cache-read orchestration.

use crate::cache::{CacheStore, Freshness};
use crate::config::TimelineConfig;
use crate::error::{Result, TimelineError};
use crate::identity::{Credentials, Identity};
use crate::remote::{Classification, Fetch, HttpFetcher};

use super::locks::{acquire, IdentityLocks};
use super::record::{decode_for, Record};

/// Serves timelines from the cache, refreshing stale entries from the
/// remote endpoint.
///
/// Calls for the same identity are serialized, so overlapping callers
/// trigger at most one fetch per expiration window.
pub struct Timeline<F: Fetch = HttpFetcher> {
    config: TimelineConfig,
    store: CacheStore,
    fetcher: F,
    locks: IdentityLocks,
}

impl Timeline<HttpFetcher> {
    /// Create a timeline backed by the HTTP fetcher.
    pub fn new(config: TimelineConfig) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetch> Timeline<F> {
    /// Create a timeline using a custom fetcher.
    pub fn with_fetcher(config: TimelineConfig, fetcher: F) -> Self {
        let store = CacheStore::new(config.cache_dir.clone());
        Self {
            config,
            store,
            fetcher,
            locks: IdentityLocks::new(),
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Return up to `max_records` recent records for `identity`.
    ///
    /// A fresh cache entry is decoded without touching the network.
    /// Otherwise one request is made; a successful body replaces the cache
    /// entry and is decoded from there. Failed requests leave the cache
    /// untouched.
    pub fn fetch_timeline(
        &self,
        identity: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<Record>> {
        let identity = Identity::parse(identity)?;
        self.fetch_identity(&identity, credentials)
    }

    /// [`fetch_timeline`](Self::fetch_timeline) for an already validated identity.
    pub fn fetch_identity(
        &self,
        identity: &Identity,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<Record>> {
        let handle = self.locks.handle(identity);
        let result = {
            let _guard = acquire(&handle);
            self.fetch_locked(identity, credentials)
        };
        self.locks.release(identity, handle);
        result
    }

    fn fetch_locked(
        &self,
        identity: &Identity,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<Record>> {
        let freshness = self.store.freshness(identity, self.config.expiration());
        if freshness == Freshness::Fresh {
            tracing::debug!("Cache hit for '{}'", identity);
            return self.read_cached(identity);
        }
        tracing::debug!("Cache {} for '{}'", freshness.as_str(), identity);

        let response = self.fetcher.fetch(identity, credentials);
        match response.classification {
            Classification::Success => {
                self.store.write(identity, &response.body)?;
                self.read_cached(identity)
            }
            Classification::Unauthorized => {
                tracing::warn!("Timeline for '{}' rejected credentials", identity);
                Err(TimelineError::Unauthorized {
                    identity: identity.to_string(),
                })
            }
            Classification::NotFound => {
                tracing::warn!("Timeline for '{}' not found", identity);
                Err(TimelineError::IdentityNotFound {
                    identity: identity.to_string(),
                })
            }
            Classification::Unavailable => {
                let message = response.reason();
                tracing::warn!("Timeline for '{}' unavailable: {}", identity, message);
                Err(TimelineError::RemoteUnavailable { message })
            }
        }
    }

    fn read_cached(&self, identity: &Identity) -> Result<Vec<Record>> {
        let blob = self.store.read(identity)?;
        decode_for(identity.as_str(), &blob, self.config.max_records)
    }
}
