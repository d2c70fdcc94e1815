//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::Commands;
use crate::config::TimelineConfig;
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: TimelineConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher with loaded configuration.
    pub fn new(config: TimelineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration commands run with.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, command: &Commands, out: &mut dyn Write) -> Result<CommandResult> {
        match command {
            Commands::Show(args) => {
                let cmd = super::show::ShowCommand::new(self.config.clone(), args.clone());
                cmd.execute(out)
            }
            Commands::Status(args) => {
                let cmd = super::status::StatusCommand::new(self.config.clone(), args.clone());
                cmd.execute(out)
            }
        }
    }
}
