//! Timeline records and the cached-blob decoder.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Creation timestamp, kept as the upstream string.
    pub created_at: String,
    /// Message body.
    pub text: String,
}

impl Record {
    pub fn new(created_at: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            created_at: created_at.into(),
            text: text.into(),
        }
    }
}

/// Decode a cached timeline blob.
///
/// The blob must be a JSON array of objects, each carrying string
/// `created_at` and `text` fields; other fields are ignored. The first
/// `max_count` entries are returned in document order. An empty array is
/// an empty timeline, not an error.
///
/// # Example
///
/// ```
/// use timeline_cache::timeline::decode;
///
/// let blob = br#"[{"created_at":"2024-01-01T00:00:00Z","text":"Hello"}]"#;
/// let records = decode(blob, 5).unwrap();
/// assert_eq!(records[0].text, "Hello");
/// ```
pub fn decode(blob: &[u8], max_count: usize) -> Result<Vec<Record>> {
    decode_for("", blob, max_count)
}

/// [`decode`], naming `identity` in any corruption error.
pub fn decode_for(identity: &str, blob: &[u8], max_count: usize) -> Result<Vec<Record>> {
    let mut records: Vec<Record> =
        serde_json::from_slice(blob).map_err(|e| TimelineError::CacheCorrupted {
            identity: identity.to_string(),
            message: e.to_string(),
        })?;

    records.truncate(max_count);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const TWO_ENTRIES: &str = r#"[
        {"created_at": "2024-01-01T00:00:00Z", "text": "Hello: World", "id": 2},
        {"created_at": "2023-12-31T00:00:00Z", "text": "Older", "id": 1}
    ]"#;

    #[test]
    fn decodes_in_document_order() {
        let records = decode(TWO_ENTRIES.as_bytes(), 10).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("2024-01-01T00:00:00Z", "Hello: World"),
                Record::new("2023-12-31T00:00:00Z", "Older"),
            ]
        );
    }

    #[test]
    fn truncates_to_max_count() {
        let records = decode(TWO_ENTRIES.as_bytes(), 1).unwrap();
        assert_eq!(records, vec![Record::new("2024-01-01T00:00:00Z", "Hello: World")]);
    }

    #[test]
    fn zero_max_count_is_empty() {
        assert!(decode(TWO_ENTRIES.as_bytes(), 0).unwrap().is_empty());
    }

    #[test]
    fn empty_array_is_not_an_error() {
        assert!(decode(b"[]", 5).unwrap().is_empty());
        assert!(decode(b"  [ ]\n", 5).unwrap().is_empty());
    }

    #[test]
    fn malformed_blob_is_corrupted() {
        let blobs: [&[u8]; 4] = [b"<statuses>", b"", b"[{\"text\":", b"{\"created_at\":\"x\"}"];
        for blob in blobs {
            let err = decode(blob, 5).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CacheCorrupted, "blob {:?}", blob);
        }
    }

    #[test]
    fn entry_missing_text_is_corrupted() {
        let err = decode_for("carol", br#"[{"created_at":"x"}]"#, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CacheCorrupted);
        assert!(err.to_string().contains("carol"));
    }
}
