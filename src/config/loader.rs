//! Configuration file discovery and loading.
//!
//! Load order (later overrides earlier):
//! 1. Built-in defaults
//! 2. An explicit `--config` file, or else the user config
//!    (`<config dir>/timeline-cache/config.yml`) if it exists
//! 3. Command-line flags and `TIMELINE_CACHE_*` environment variables

use crate::config::schema::{ConfigOverrides, TimelineConfig};
use crate::config::validator::validate;
use crate::error::{Result, TimelineError};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the user's config file, whether or not it exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("timeline-cache").join("config.yml"))
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<TimelineConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TimelineError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TimelineError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<TimelineConfig> {
    if content.trim().is_empty() {
        return Ok(TimelineConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| TimelineError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, override and validate configuration.
///
/// An explicit path must exist. The fallback path is used only if present.
pub fn load_config_from(
    explicit: Option<&Path>,
    fallback: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<TimelineConfig> {
    let base = match (explicit, fallback) {
        (Some(path), _) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        (None, Some(path)) if path.is_file() => {
            tracing::debug!("Loading user config from {}", path.display());
            load_config_file(path)?
        }
        _ => TimelineConfig::default(),
    };

    let config = overrides.apply(base);
    validate(&config)?;
    Ok(config)
}

/// Load configuration using the user config as fallback.
pub fn load_config(explicit: Option<&Path>, overrides: ConfigOverrides) -> Result<TimelineConfig> {
    let fallback = user_config_path();
    load_config_from(explicit, fallback.as_deref(), overrides)
}
