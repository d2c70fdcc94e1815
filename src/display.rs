//! Plain-text rendering of timelines for status pages.
//!
//! A message of the form `Header: body` is shown as a headed section; a
//! message without a header falls back to [`DEFAULT_HEADER`]. Errors are
//! reported by the caller, not rendered here.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::timeline::Record;

/// Header used when a message has none.
pub const DEFAULT_HEADER: &str = "IT Message";

/// Delimiter between header and body.
pub const HEADER_DELIMITER: char = ':';

/// Footer timestamp format, e.g. `Jan 1 2024 @ 09:05 am`.
pub const POSTED_FORMAT: &str = "%b %-d %Y @ %I:%M %P";

/// A message split into header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: String,
    pub body: String,
}

/// Split a message on the first delimiter.
///
/// Without a delimiter, or with nothing after it, the header is
/// [`DEFAULT_HEADER`] and the text before any delimiter is the body.
///
/// # Example
///
/// ```
/// use timeline_cache::display::split_message;
///
/// let msg = split_message("Outage: mail is down");
/// assert_eq!(msg.header, "Outage");
/// assert_eq!(msg.body, "mail is down");
///
/// let msg = split_message("All systems normal");
/// assert_eq!(msg.header, "IT Message");
/// ```
pub fn split_message(text: &str) -> Message {
    match text.split_once(HEADER_DELIMITER) {
        Some((header, body)) if !body.trim().is_empty() => Message {
            header: header.trim().to_string(),
            body: body.trim().to_string(),
        },
        Some((header, _)) => Message {
            header: DEFAULT_HEADER.to_string(),
            body: header.trim().to_string(),
        },
        None => Message {
            header: DEFAULT_HEADER.to_string(),
            body: text.trim().to_string(),
        },
    }
}

/// Render records as headed sections with a "posted on" footer stamped
/// with `now`, the time of rendering.
pub fn render_records<Tz>(records: &[Record], now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if records.is_empty() {
        return format!("{}\n\nNo messages.\n", DEFAULT_HEADER);
    }

    let posted = now.format(POSTED_FORMAT).to_string();
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let message = split_message(&record.text);
        out.push_str(&message.header);
        out.push('\n');
        out.push_str(&message.body);
        out.push('\n');
        out.push_str(&format!("posted on {}\n", posted));
    }
    out
}
