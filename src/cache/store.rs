//! Cache storage implementation.
//!
//! One file per identity, `<root>/<identity>.json`, holding the response
//! body exactly as received. The file's modification time is the entry's
//! last-write timestamp.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

use super::freshness::{age_at, Freshness};
use crate::error::{Result, TimelineError};
use crate::identity::Identity;

/// Extension used for cache entries.
pub const ENTRY_EXTENSION: &str = "json";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Summary of one cache entry on disk.
#[derive(Debug, Clone, Serialize)]
pub struct EntryInfo {
    /// Path to the entry file.
    pub path: PathBuf,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last write time.
    pub modified: DateTime<Utc>,
    /// Seconds since the last write.
    pub age_secs: u64,
}

/// Storage for cached timelines.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Root directory for cache.
    root: PathBuf,
}

impl CacheStore {
    /// Create a new cache store. The directory is not created.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path of an identity's entry.
    pub fn path_for(&self, identity: &Identity) -> PathBuf {
        self.root
            .join(format!("{}.{}", identity.as_str(), ENTRY_EXTENSION))
    }

    fn temp_path_for(&self, identity: &Identity) -> PathBuf {
        let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.root.join(format!(
            ".{}.{}.{}.{}.tmp",
            identity.as_str(),
            ENTRY_EXTENSION,
            std::process::id(),
            n
        ))
    }

    /// Check if an entry exists.
    pub fn exists(&self, identity: &Identity) -> bool {
        self.path_for(identity).is_file()
    }

    /// Modification time of an entry.
    ///
    /// Fails with [`TimelineError::CacheUnavailable`] if there is no entry.
    pub fn last_modified(&self, identity: &Identity) -> Result<SystemTime> {
        let path = self.path_for(identity);
        let metadata = fs::metadata(&path).map_err(|e| self.read_error(identity, e))?;
        Ok(metadata.modified()?)
    }

    /// Age of an entry at `now`.
    pub fn age(&self, identity: &Identity, now: SystemTime) -> Result<Duration> {
        Ok(age_at(self.last_modified(identity)?, now))
    }

    /// Check an entry against the expiration window.
    pub fn freshness(&self, identity: &Identity, expiration: Duration) -> Freshness {
        let modified = if self.exists(identity) {
            self.last_modified(identity).ok()
        } else {
            None
        };
        Freshness::evaluate(modified, SystemTime::now(), expiration)
    }

    /// Shorthand for `freshness(..).is_fresh()`.
    pub fn is_fresh(&self, identity: &Identity, expiration: Duration) -> bool {
        self.freshness(identity, expiration).is_fresh()
    }

    /// Read the raw cached blob.
    ///
    /// Fails with [`TimelineError::CacheUnavailable`] if there is no entry.
    pub fn read(&self, identity: &Identity) -> Result<Vec<u8>> {
        let path = self.path_for(identity);
        fs::read(&path).map_err(|e| self.read_error(identity, e))
    }

    /// Replace an entry with `blob`.
    ///
    /// The blob is written to a temporary file in the cache directory,
    /// synced, then renamed over the entry, so readers see either the old
    /// blob or the new one.
    pub fn write(&self, identity: &Identity, blob: &[u8]) -> Result<()> {
        if !self.root.is_dir() {
            return Err(TimelineError::CacheDirectoryMissing {
                path: self.root.clone(),
            });
        }

        let path = self.path_for(identity);
        let temp_path = self.temp_path_for(identity);

        let result = write_synced(&temp_path, blob).and_then(|()| fs::rename(&temp_path, &path));
        if let Err(err) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(self.write_error(path, err));
        }

        tracing::debug!(
            "Stored {} bytes for '{}' at {}",
            blob.len(),
            identity,
            path.display()
        );
        Ok(())
    }

    /// Describe an entry, or `None` if it does not exist.
    pub fn entry(&self, identity: &Identity) -> Result<Option<EntryInfo>> {
        let path = self.path_for(identity);
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let modified = metadata.modified()?;
        Ok(Some(EntryInfo {
            path,
            size_bytes: metadata.len(),
            modified: DateTime::<Utc>::from(modified),
            age_secs: age_at(modified, SystemTime::now()).as_secs(),
        }))
    }

    fn read_error(&self, identity: &Identity, err: io::Error) -> TimelineError {
        if err.kind() == io::ErrorKind::NotFound {
            TimelineError::CacheUnavailable {
                identity: identity.to_string(),
            }
        } else {
            TimelineError::Io(err)
        }
    }

    fn write_error(&self, path: PathBuf, err: io::Error) -> TimelineError {
        match err.kind() {
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                TimelineError::CacheDirectoryNotWritable {
                    path: self.root.clone(),
                }
            }
            io::ErrorKind::NotFound if !self.root.is_dir() => {
                TimelineError::CacheDirectoryMissing {
                    path: self.root.clone(),
                }
            }
            _ => TimelineError::CacheWriteFailed { path, source: err },
        }
    }
}

fn write_synced(path: &Path, blob: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(blob)?;
    file.sync_all()
}
