//! Error types for timeline operations.
//!
//! This module defines [`TimelineError`], the error type returned by every
//! fallible operation in the crate, the [`ErrorKind`] classification used for
//! exhaustive handling, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TimelineError` for every condition a caller may want to tell apart
//! - Use `anyhow::Error` (via `TimelineError::Other`) for unexpected errors
//! - Errors are returned, never logged and dropped

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for timeline operations.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// No username was supplied.
    #[error("No username was provided")]
    MissingIdentity,

    /// The username cannot be used as a cache key.
    #[error("Invalid username '{identity}': must not contain path separators or control characters")]
    InvalidIdentity { identity: String },

    /// A cache entry was read before it was ever written.
    #[error("No cached timeline for '{identity}'")]
    CacheUnavailable { identity: String },

    /// The configured cache directory is absent.
    #[error("Cache directory does not exist: {path}")]
    CacheDirectoryMissing { path: PathBuf },

    /// The configured cache directory rejects writes.
    #[error("Cache directory is not writable: {path}")]
    CacheDirectoryNotWritable { path: PathBuf },

    /// Any other failure while storing a cache entry.
    #[error("Failed to store cache entry {path}: {source}")]
    CacheWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored timeline is not in the expected format.
    #[error("Cached timeline for '{identity}' is corrupted: {message}")]
    CacheCorrupted { identity: String, message: String },

    /// Credentials were missing or rejected for a protected timeline.
    #[error("Credentials for '{identity}' are invalid or missing for a protected account")]
    Unauthorized { identity: String },

    /// The remote service does not know the username.
    #[error("User '{identity}' could not be found")]
    IdentityNotFound { identity: String },

    /// Any other remote failure, transport errors included.
    #[error("Timeline service is not available: {message}")]
    RemoteUnavailable { message: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Discriminant of a [`TimelineError`], for matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingIdentity,
    InvalidIdentity,
    CacheUnavailable,
    CacheDirectoryMissing,
    CacheDirectoryNotWritable,
    CacheWriteFailed,
    CacheCorrupted,
    Unauthorized,
    IdentityNotFound,
    RemoteUnavailable,
    Config,
    Internal,
}

impl ErrorKind {
    /// Process exit code used by the CLI for this kind of failure.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::MissingIdentity | ErrorKind::InvalidIdentity => 2,
            ErrorKind::Config => 3,
            ErrorKind::CacheUnavailable
            | ErrorKind::CacheDirectoryMissing
            | ErrorKind::CacheDirectoryNotWritable
            | ErrorKind::CacheWriteFailed => 4,
            ErrorKind::CacheCorrupted => 5,
            ErrorKind::Unauthorized => 6,
            ErrorKind::IdentityNotFound => 7,
            ErrorKind::RemoteUnavailable => 8,
            ErrorKind::Internal => 1,
        }
    }
}

impl TimelineError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TimelineError::MissingIdentity => ErrorKind::MissingIdentity,
            TimelineError::InvalidIdentity { .. } => ErrorKind::InvalidIdentity,
            TimelineError::CacheUnavailable { .. } => ErrorKind::CacheUnavailable,
            TimelineError::CacheDirectoryMissing { .. } => ErrorKind::CacheDirectoryMissing,
            TimelineError::CacheDirectoryNotWritable { .. } => {
                ErrorKind::CacheDirectoryNotWritable
            }
            TimelineError::CacheWriteFailed { .. } => ErrorKind::CacheWriteFailed,
            TimelineError::CacheCorrupted { .. } => ErrorKind::CacheCorrupted,
            TimelineError::Unauthorized { .. } => ErrorKind::Unauthorized,
            TimelineError::IdentityNotFound { .. } => ErrorKind::IdentityNotFound,
            TimelineError::RemoteUnavailable { .. } => ErrorKind::RemoteUnavailable,
            TimelineError::ConfigNotFound { .. }
            | TimelineError::ConfigParseError { .. }
            | TimelineError::ConfigValidationError { .. } => ErrorKind::Config,
            TimelineError::Io(_) | TimelineError::Other(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for timeline operations.
pub type Result<T> = std::result::Result<T, TimelineError>;
