//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Show a user's recent timeline messages, cached on disk.
#[derive(Debug, Parser)]
#[command(name = "timeline-cache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the user config)
    #[arg(short, long, global = true, env = "TIMELINE_CACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding cached timelines
    #[arg(long, global = true, env = "TIMELINE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Seconds a cached timeline stays fresh (0 always refetches)
    #[arg(long, global = true, value_name = "SECS", env = "TIMELINE_CACHE_EXPIRATION")]
    pub expiration: Option<u64>,

    /// Maximum number of messages to show
    #[arg(short = 'n', long, global = true, env = "TIMELINE_CACHE_MAX_RECORDS")]
    pub max_records: Option<usize>,

    /// Timeline endpoint template
    #[arg(long, global = true, env = "TIMELINE_CACHE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given on the command line or through the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            cache_dir: self.cache_dir.clone(),
            expiration_secs: self.expiration,
            max_records: self.max_records,
            endpoint: self.endpoint.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and show recent messages
    Show(ShowArgs),

    /// Show the cache entry for a user
    Status(StatusArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Username whose timeline to show
    pub identity: String,

    /// Read the password for a protected account from this environment variable
    #[arg(long, value_name = "VAR")]
    pub password_env: Option<String>,

    /// Output records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {
    /// Username whose cache entry to inspect
    pub identity: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_flags() {
        let cli = Cli::parse_from([
            "timeline-cache",
            "--max-records",
            "3",
            "show",
            "alice",
            "--json",
            "--password-env",
            "ALICE_PASSWORD",
        ]);

        assert_eq!(cli.max_records, Some(3));
        let Commands::Show(args) = cli.command else {
            panic!("Expected Show command");
        };
        assert_eq!(args.identity, "alice");
        assert!(args.json);
        assert_eq!(args.password_env.as_deref(), Some("ALICE_PASSWORD"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["timeline-cache", "status", "bob", "--expiration", "0"]);
        assert_eq!(cli.expiration, Some(0));
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn overrides_carry_flags() {
        let cli = Cli::parse_from([
            "timeline-cache",
            "--cache-dir",
            "/tmp/tl",
            "--endpoint",
            "http://localhost/{identity}",
            "show",
            "alice",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.cache_dir, Some(PathBuf::from("/tmp/tl")));
        assert_eq!(
            overrides.endpoint.as_deref(),
            Some("http://localhost/{identity}")
        );
        assert!(overrides.max_records.is_none());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["timeline-cache"]).is_err());
    }
}
