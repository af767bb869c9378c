//! Read-only lookup tables of known QRIS payloads and URLs.
//!
//! `KnownEntries` is built once at start-up (from the built-in demo tables or a
//! JSON file), wrapped in an `Arc` and handed to the
//! [`Classifier`](crate::classifier::Classifier). Nothing mutates it afterwards.
//!
//! Both tables keep insertion order and match keys exactly. There is no
//! substring or fuzzy matching.

mod builtin;
mod file;

use log::debug;

use crate::config::DEFAULT_URL_HINTS;
use crate::error_handling::DatabaseError;
use crate::models::{CheckResult, InputType};

/// Lookup tables consulted by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownEntries {
    qris: Vec<(String, CheckResult)>,
    urls: Vec<(String, CheckResult)>,
    url_hints: Vec<String>,
}

impl KnownEntries {
    /// Creates empty tables with the given URL hint substrings.
    pub fn new(url_hints: Vec<String>) -> Self {
        Self {
            qris: Vec::new(),
            urls: Vec::new(),
            url_hints,
        }
    }

    /// The demo tables shipped with the tool: four QRIS payloads and two URLs.
    pub fn builtin() -> Self {
        let mut entries = Self::new(DEFAULT_URL_HINTS.iter().map(|h| h.to_string()).collect());
        for &(key, entity, status, notes) in builtin::QRIS_ENTRIES {
            entries
                .qris
                .push((key.to_string(), CheckResult::new(entity, InputType::Qris, status, notes)));
        }
        for &(key, entity, status, notes) in builtin::URL_ENTRIES {
            entries
                .urls
                .push((key.to_string(), CheckResult::new(entity, InputType::Url, status, notes)));
        }
        entries
    }

    /// Adds a QRIS table entry keyed by the full payload.
    ///
    /// The key is trimmed, since lookups are made with trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::EmptyKey` for a blank key and
    /// `DatabaseError::DuplicateKey` if the key is already present.
    pub fn insert_qris(
        &mut self,
        key: impl Into<String>,
        result: CheckResult,
    ) -> Result<(), DatabaseError> {
        insert_unique(&mut self.qris, "qris", key.into(), result)
    }

    /// Adds a URL table entry keyed by the full URL string.
    ///
    /// # Errors
    ///
    /// Same as [`KnownEntries::insert_qris`].
    pub fn insert_url(
        &mut self,
        key: impl Into<String>,
        result: CheckResult,
    ) -> Result<(), DatabaseError> {
        insert_unique(&mut self.urls, "urls", key.into(), result)
    }

    /// Exact-match lookup in the QRIS table.
    pub fn lookup_qris(&self, payload: &str) -> Option<&CheckResult> {
        lookup(&self.qris, payload)
    }

    /// Exact-match lookup in the URL table.
    pub fn lookup_url(&self, url: &str) -> Option<&CheckResult> {
        lookup(&self.urls, url)
    }

    /// Substrings that mark an input as a URL even if it does not parse as one.
    pub fn url_hints(&self) -> &[String] {
        &self.url_hints
    }

    /// Whether `input` contains any URL hint.
    pub fn matches_url_hint(&self, input: &str) -> bool {
        self.url_hints.iter().any(|hint| input.contains(hint.as_str()))
    }

    /// QRIS entries in insertion order.
    pub fn qris_entries(&self) -> impl Iterator<Item = (&str, &CheckResult)> {
        self.qris.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// URL entries in insertion order.
    pub fn url_entries(&self) -> impl Iterator<Item = (&str, &CheckResult)> {
        self.urls.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of QRIS entries.
    pub fn qris_len(&self) -> usize {
        self.qris.len()
    }

    /// Number of URL entries.
    pub fn url_len(&self) -> usize {
        self.urls.len()
    }
}

impl Default for KnownEntries {
    fn default() -> Self {
        Self::builtin()
    }
}

fn lookup<'a>(table: &'a [(String, CheckResult)], key: &str) -> Option<&'a CheckResult> {
    table.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn insert_unique(
    table: &mut Vec<(String, CheckResult)>,
    name: &'static str,
    key: String,
    result: CheckResult,
) -> Result<(), DatabaseError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(DatabaseError::EmptyKey { table: name });
    }
    if lookup(table, trimmed).is_some() {
        return Err(DatabaseError::DuplicateKey {
            table: name,
            key: trimmed.to_string(),
        });
    }
    if trimmed.len() != key.len() {
        debug!("Trimmed whitespace around {} key {:?}", name, trimmed);
    }
    table.push((trimmed.to_string(), result));
    Ok(())
}
