//! Cache freshness evaluation.
//!
//! Freshness is a plain timestamp delta between now and the entry's
//! modification time; there is no conditional-request revalidation.

use std::time::{Duration, SystemTime};

/// Outcome of checking an entry against the expiration window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Entry exists and is within the expiration window.
    Fresh,
    /// Entry exists but is older than the expiration window.
    Stale,
    /// No entry on disk.
    Missing,
}

impl Freshness {
    /// Evaluate freshness for an entry modified at `modified`.
    ///
    /// A zero expiration is always stale. A modification time in the future
    /// counts as age zero.
    pub fn evaluate(modified: Option<SystemTime>, now: SystemTime, expiration: Duration) -> Self {
        let Some(modified) = modified else {
            return Freshness::Missing;
        };

        if expiration.is_zero() {
            return Freshness::Stale;
        }

        if age_at(modified, now) <= expiration {
            Freshness::Fresh
        } else {
            Freshness::Stale
        }
    }

    pub fn is_fresh(self) -> bool {
        self == Freshness::Fresh
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Freshness::Fresh => "fresh",
            Freshness::Stale => "stale",
            Freshness::Missing => "missing",
        }
    }
}

/// Age of an entry at `now`, clamped to zero for future timestamps.
pub fn age_at(modified: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(modified).unwrap_or(Duration::ZERO)
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}
