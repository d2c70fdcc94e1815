//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use timeline_cache::config::{load_config_from, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "expiration_secs: 600\nmax_records: 3").unwrap();
//!
//! let config = load_config_from(Some(&path), None, ConfigOverrides::default()).unwrap();
//! assert_eq!(config.expiration_secs, 600);
//! assert_eq!(config.max_records, 3);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, load_config_from, parse_config, user_config_path};
pub use schema::{
    ConfigOverrides, TimelineConfig, DEFAULT_ENDPOINT, DEFAULT_EXPIRATION_SECS,
    DEFAULT_MAX_RECORDS, DEFAULT_TIMEOUT_SECS,
};
pub use validator::{validate, validate_config, ValidationError};
