//! timeline-cache - Recent timeline messages with an on-disk cache.
//!
//! Fetches a user's short-form message timeline from a remote endpoint,
//! keeps the raw response on disk for a configurable expiration window,
//! and returns a bounded number of decoded records.
//!
//! # Modules
//!
//! - [`cache`] - One-file-per-user cache store and freshness checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`display`] - Plain-text rendering for status pages
//! - [`error`] - Error types and result aliases
//! - [`identity`] - Usernames and credentials
//! - [`remote`] - HTTP fetching and response classification
//! - [`timeline`] - Record decoding and the fetch-cache-read orchestration
//!
//! # Example
//!
//! ```
//! use timeline_cache::timeline::decode;
//! use timeline_cache::display::split_message;
//!
//! let blob = br#"[{"created_at":"2024-01-01T00:00:00Z","text":"Hello: World"}]"#;
//! let records = decode(blob, 1).unwrap();
//! let message = split_message(&records[0].text);
//! assert_eq!(message.header, "Hello");
//! assert_eq!(message.body, "World");
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod identity;
pub mod remote;
pub mod timeline;

pub use error::{ErrorKind, Result, TimelineError};
pub use identity::{Credentials, Identity};
pub use timeline::{Record, Timeline};
