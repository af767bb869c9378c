//! JSON lookup table files.
//!
//! ```json
//! {
//!   "url_hints": ["bit.ly"],
//!   "qris": [{ "key": "000201...", "entity": "TOKO", "status": "VALID", "notes": "..." }],
//!   "urls": [{ "key": "https://example.com", "entity": "example.com", "status": "SECURE" }]
//! }
//! ```
//!
//! `url_hints` falls back to the built-in hints when omitted. The record type is
//! implied by the table it appears in.

use std::path::Path;

use log::info;
use serde::Deserialize;

use super::KnownEntries;
use crate::config::DEFAULT_URL_HINTS;
use crate::error_handling::DatabaseError;
use crate::models::{CheckResult, CheckStatus, InputType};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    url_hints: Option<Vec<String>>,
    #[serde(default)]
    qris: Vec<EntryRecord>,
    #[serde(default)]
    urls: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryRecord {
    key: String,
    entity: String,
    status: CheckStatus,
    #[serde(default)]
    notes: String,
}

impl EntryRecord {
    fn into_result(self, input_type: InputType) -> (String, CheckResult) {
        let result = CheckResult::new(self.entity, input_type, self.status, self.notes);
        (self.key, result)
    }
}

impl KnownEntries {
    /// Parses lookup tables from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Parse` for malformed JSON or unknown fields, and
    /// `DatabaseError::DuplicateKey` / `DatabaseError::EmptyKey` for invalid keys.
    pub fn from_json_str(json: &str) -> Result<Self, DatabaseError> {
        let file: TableFile = serde_json::from_str(json)?;

        let hints = file
            .url_hints
            .unwrap_or_else(|| DEFAULT_URL_HINTS.iter().map(|h| h.to_string()).collect());
        let mut entries = KnownEntries::new(hints);

        for record in file.qris {
            let (key, result) = record.into_result(InputType::Qris);
            entries.insert_qris(key, result)?;
        }
        for record in file.urls {
            let (key, result) = record.into_result(InputType::Url);
            entries.insert_url(key, result)?;
        }

        Ok(entries)
    }

    /// Reads lookup tables from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the file cannot be read, otherwise the
    /// same errors as [`KnownEntries::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, DatabaseError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatabaseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let entries = Self::from_json_str(&json)?;
        info!(
            "Loaded {} QRIS and {} URL entries from {}",
            entries.qris_len(),
            entries.url_len(),
            path.display()
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str_full() {
        let json = r#"{
            "url_hints": ["s.id"],
            "qris": [
                {"key": "000201ID.CO.QRIS.WWW5904TOKO", "entity": "TOKO", "status": "VALID", "notes": "ok"}
            ],
            "urls": [
                {"key": "https://s.id/promo", "entity": "s.id/promo", "status": "MALICIOUS"}
            ]
        }"#;
        let entries = KnownEntries::from_json_str(json).unwrap();
        assert_eq!(entries.url_hints(), ["s.id".to_string()]);

        let qris = entries.lookup_qris("000201ID.CO.QRIS.WWW5904TOKO").unwrap();
        assert_eq!(qris.input_type, InputType::Qris);
        assert_eq!(qris.status, CheckStatus::Valid);

        let url = entries.lookup_url("https://s.id/promo").unwrap();
        assert_eq!(url.input_type, InputType::Url);
        assert_eq!(url.status, CheckStatus::Malicious);
        assert_eq!(url.notes, "");
    }

    #[test]
    fn test_from_json_str_defaults() {
        let entries = KnownEntries::from_json_str("{}").unwrap();
        assert_eq!(entries.qris_len(), 0);
        assert_eq!(entries.url_len(), 0);
        assert_eq!(entries.url_hints().len(), DEFAULT_URL_HINTS.len());
    }

    #[test]
    fn test_from_json_str_rejects_bad_status() {
        let json = r#"{"urls": [{"key": "https://a.b", "entity": "a.b", "status": "EVIL"}]}"#;
        assert!(matches!(
            KnownEntries::from_json_str(json),
            Err(DatabaseError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_str_rejects_unknown_fields() {
        let json = r#"{"domains": []}"#;
        assert!(matches!(
            KnownEntries::from_json_str(json),
            Err(DatabaseError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_str_rejects_duplicates() {
        let json = r#"{"urls": [
            {"key": "https://a.b", "entity": "a.b", "status": "SECURE"},
            {"key": "https://a.b", "entity": "a.b", "status": "MALICIOUS"}
        ]}"#;
        match KnownEntries::from_json_str(json) {
            Err(DatabaseError::DuplicateKey { table, key }) => {
                assert_eq!(table, "urls");
                assert_eq!(key, "https://a.b");
            }
            other => panic!("expected duplicate key error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = KnownEntries::from_path(Path::new("/nonexistent/entries.json"));
        assert!(matches!(result, Err(DatabaseError::Io { .. })));
    }
}
