//! Input classification.
//!
//! Decides whether an input is a URL, a QRIS payload or neither, looks it up
//! in the [`KnownEntries`] tables, and otherwise builds an `UNKNOWN` result.
//!
//! Branch order matters: URL detection runs before QRIS detection, and input
//! matching neither falls through to the unrecognized branch. Classification
//! never fails; every input yields exactly one [`CheckResult`].

mod url;

use std::sync::Arc;

use log::debug;

use crate::config::{
    NOTES_UNKNOWN_QRIS, NOTES_UNKNOWN_URL, NOTES_UNRECOGNIZED, UNRECOGNIZED_ENTITY,
};
use crate::known_entries::KnownEntries;
use crate::models::{CheckResult, CheckStatus, InputType};
use crate::qris::{extract_merchant_name, looks_like_qris};

pub use self::url::{is_valid_url, url_entity};

/// Decides which branch an already-trimmed input takes.
///
/// URL when it parses as an http(s) URL or contains one of the configured URL
/// hints; QRIS when it starts with `000201` and carries the
/// `ID.CO.QRIS.WWW` marker; `Unknown` otherwise.
pub fn detect_format(entries: &KnownEntries, input: &str) -> InputType {
    if is_valid_url(input) || entries.matches_url_hint(input) {
        InputType::Url
    } else if looks_like_qris(input) {
        InputType::Qris
    } else {
        InputType::Unknown
    }
}

/// Classifies inputs against a shared set of lookup tables.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use qris_check::{CheckStatus, Classifier, InputType, KnownEntries};
///
/// let classifier = Classifier::new(Arc::new(KnownEntries::builtin()));
/// let result = classifier.classify("  https://shopee.co.id  ");
/// assert_eq!(result.input_type, InputType::Url);
/// assert_eq!(result.status, CheckStatus::Secure);
/// assert_eq!(result.entity, "shopee.co.id");
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    entries: Arc<KnownEntries>,
}

impl Classifier {
    /// Creates a classifier over the given tables.
    pub fn new(entries: Arc<KnownEntries>) -> Self {
        Self { entries }
    }

    /// The tables this classifier consults.
    pub fn entries(&self) -> &KnownEntries {
        &self.entries
    }

    /// Classifies `input` after trimming surrounding whitespace.
    pub fn classify(&self, input: &str) -> CheckResult {
        let input = input.trim();
        let input_type = detect_format(&self.entries, input);
        debug!("Detected {} input ({} chars)", input_type, input.chars().count());

        match input_type {
            InputType::Url => self.classify_url(input),
            InputType::Qris => self.classify_qris(input),
            InputType::Unknown => CheckResult::new(
                UNRECOGNIZED_ENTITY,
                InputType::Unknown,
                CheckStatus::Unknown,
                NOTES_UNRECOGNIZED,
            ),
        }
    }

    fn classify_url(&self, input: &str) -> CheckResult {
        if let Some(known) = self.entries.lookup_url(input) {
            debug!("URL table hit: {} ({})", known.entity, known.status);
            return known.clone();
        }
        CheckResult::new(
            url_entity(input),
            InputType::Url,
            CheckStatus::Unknown,
            NOTES_UNKNOWN_URL,
        )
    }

    fn classify_qris(&self, input: &str) -> CheckResult {
        if let Some(known) = self.entries.lookup_qris(input) {
            debug!("QRIS table hit: {} ({})", known.entity, known.status);
            return known.clone();
        }
        CheckResult::new(
            extract_merchant_name(input),
            InputType::Qris,
            CheckStatus::Unknown,
            NOTES_UNKNOWN_QRIS,
        )
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(KnownEntries::builtin()))
    }
}
