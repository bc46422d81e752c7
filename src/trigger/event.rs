//! Notification document parsing
//!
//! Storage events arrive as a JSON document listing the object keys that
//! were created. Only the keys matter to the pipeline; everything else the
//! emitting store attaches is ignored by serde.

use crate::types::DigestError;
use serde::Deserialize;

/// A storage notification naming newly created objects
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationDocument {
    /// One record per created object
    pub records: Vec<ObjectRecord>,
}

/// A single created-object record inside a notification
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectRecord {
    /// Key of the created object
    pub key: String,
}

impl NotificationDocument {
    /// Parse a notification document from raw JSON bytes
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::MalformedInput`] if the document is not valid
    /// JSON or does not match the expected shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DigestError> {
        serde_json::from_slice(bytes).map_err(|e| DigestError::MalformedInput {
            line: None,
            message: format!("notification document: {}", e),
        })
    }

    /// The object keys named by this notification, in document order
    pub fn keys(&self) -> Vec<String> {
        self.records.iter().map(|r| r.key.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_keys_in_order() {
        let doc = NotificationDocument::from_slice(
            br#"{"records": [{"key": "a.csv"}, {"key": "b.csv"}]}"#,
        )
        .unwrap();

        assert_eq!(doc.keys(), vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let doc = NotificationDocument::from_slice(
            br#"{"records": [{"key": "a.csv", "size": 123, "etag": "x"}], "source": "bucket"}"#,
        )
        .unwrap();

        assert_eq!(doc.keys(), vec!["a.csv"]);
    }

    #[test]
    fn test_empty_records_list() {
        let doc = NotificationDocument::from_slice(br#"{"records": []}"#).unwrap();
        assert!(doc.keys().is_empty());
    }

    #[test]
    fn test_invalid_json_is_malformed_input() {
        let err = NotificationDocument::from_slice(b"{not json").unwrap_err();

        assert!(matches!(err, DigestError::MalformedInput { .. }));
    }

    #[test]
    fn test_missing_records_field_is_malformed_input() {
        let err = NotificationDocument::from_slice(br#"{"items": []}"#).unwrap_err();

        assert!(matches!(err, DigestError::MalformedInput { .. }));
    }
}
