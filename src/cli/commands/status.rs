//! Status command implementation.
//!
//! Provides `timeline-cache status <identity>`, reporting the cache entry
//! without touching the network.

use std::io::Write;
use std::time::Duration;

use crate::cache::{format_duration, CacheStore};
use crate::cli::args::StatusArgs;
use crate::config::TimelineConfig;
use crate::error::{Result, TimelineError};
use crate::identity::Identity;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    config: TimelineConfig,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(config: TimelineConfig, args: StatusArgs) -> Self {
        Self { config, args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let identity = Identity::parse(&self.args.identity)?;
        let store = CacheStore::new(self.config.cache_dir.clone());
        let expiration = self.config.expiration();

        let freshness = store.freshness(&identity, expiration);
        let entry = store.entry(&identity)?;

        if self.args.json {
            let output = serde_json::json!({
                "identity": identity.as_str(),
                "path": store.path_for(&identity),
                "state": freshness.as_str(),
                "expiration_secs": self.config.expiration_secs,
                "entry": entry,
            });
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| TimelineError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        writeln!(out, "Identity: {}", identity)?;
        writeln!(out, "Path:     {}", store.path_for(&identity).display())?;
        writeln!(out, "State:    {}", freshness.as_str())?;
        if let Some(entry) = entry {
            writeln!(
                out,
                "Age:      {} (expires after {})",
                format_duration(Duration::from_secs(entry.age_secs)),
                format_duration(expiration)
            )?;
            writeln!(out, "Size:     {} bytes", entry.size_bytes)?;
        }

        Ok(CommandResult::success())
    }
}
