//! timeline-cache CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use timeline_cache::cli::{Cli, CommandDispatcher};
use timeline_cache::config::load_config;
use timeline_cache::TimelineError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("timeline_cache=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timeline_cache=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn report(err: &TimelineError) -> ExitCode {
    eprintln!("{} {}", style("Error:").red().bold(), err);
    ExitCode::from(err.kind().exit_code() as u8)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("timeline-cache starting with args: {:?}", cli);

    let config = match load_config(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    let dispatcher = CommandDispatcher::new(config);
    let mut stdout = std::io::stdout().lock();

    let code = match dispatcher.dispatch(&cli.command, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => report(&e),
    };
    let _ = stdout.flush();
    code
}
