//! Show command implementation.
//!
//! Provides `timeline-cache show <identity>`.

use chrono::Local;
use std::io::Write;

use crate::cli::args::ShowArgs;
use crate::config::TimelineConfig;
use crate::display::render_records;
use crate::error::{Result, TimelineError};
use crate::identity::Credentials;
use crate::timeline::{Record, Timeline};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    config: TimelineConfig,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(config: TimelineConfig, args: ShowArgs) -> Self {
        Self { config, args }
    }

    /// Credentials for the request, if a password variable was named.
    fn credentials(&self) -> Result<Option<Credentials>> {
        let Some(var) = &self.args.password_env else {
            return Ok(None);
        };
        let password =
            std::env::var(var).map_err(|_| TimelineError::ConfigValidationError {
                message: format!("environment variable {} is not set", var),
            })?;
        Ok(Some(Credentials::new(self.args.identity.trim(), password)))
    }

    fn write_records(&self, records: &[Record], out: &mut dyn Write) -> Result<()> {
        if self.args.json {
            let json = serde_json::to_string_pretty(records)
                .map_err(|e| TimelineError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
        } else {
            write!(out, "{}", render_records(records, &Local::now()))?;
        }
        Ok(())
    }
}

impl Command for ShowCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let credentials = self.credentials()?;
        let timeline = Timeline::new(self.config.clone())?;

        let records = timeline.fetch_timeline(&self.args.identity, credentials.as_ref())?;
        tracing::debug!("Showing {} record(s)", records.len());

        self.write_records(&records, out)?;
        Ok(CommandResult::success())
    }
}
