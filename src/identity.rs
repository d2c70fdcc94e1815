//! Usernames and per-request credentials.
//!
//! An [`Identity`] is both the remote username and the cache key, so it can
//! only be constructed through [`Identity::parse`], which rejects anything
//! that would escape the cache directory.

use std::fmt;

use crate::error::{Result, TimelineError};

/// Characters that are never allowed in a cache key.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// A validated remote username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Validate a raw username.
    ///
    /// Surrounding whitespace is trimmed. Empty input yields
    /// [`TimelineError::MissingIdentity`]; anything containing path
    /// separators, reserved characters, control characters, `..` or a
    /// leading `.` yields [`TimelineError::InvalidIdentity`].
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(TimelineError::MissingIdentity);
        }

        let unsafe_name = name.starts_with('.')
            || name.contains("..")
            || name.chars().any(|c| c.is_control() || RESERVED.contains(&c));

        if unsafe_name {
            return Err(TimelineError::InvalidIdentity {
                identity: name.to_string(),
            });
        }

        Ok(Self(name.to_string()))
    }

    /// The username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Basic-auth credentials for a protected timeline.
///
/// Never persisted. The password is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
