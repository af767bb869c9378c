//! Core result types produced by the classifier.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// The detected format of an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputType {
    /// An http(s) URL or a string carrying a known URL hint (e.g. `bit.ly`)
    Url,
    /// A QRIS payment payload
    Qris,
    /// Neither a URL nor a QRIS payload
    Unknown,
}

impl InputType {
    /// Returns the upper-case label used in reports and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Url => "URL",
            InputType::Qris => "QRIS",
            InputType::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict attached to a classified input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// Known legitimate QRIS merchant
    Valid,
    /// Known phishing or scam entry
    Malicious,
    /// Known safe URL/domain
    Secure,
    /// Not present in the lookup tables
    Unknown,
}

impl CheckStatus {
    /// Returns the upper-case label used in reports and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Valid => "VALID",
            CheckStatus::Malicious => "MALICIOUS",
            CheckStatus::Secure => "SECURE",
            CheckStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a single input.
///
/// One of these is produced for every call to
/// [`Classifier::classify`](crate::classifier::Classifier::classify). Table hits
/// are cloned out of the lookup tables, so callers always own a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Merchant name, domain, or `"N/A"`
    pub entity: String,
    /// Detected input format
    #[serde(rename = "type")]
    pub input_type: InputType,
    /// Lookup verdict
    pub status: CheckStatus,
    /// Free-text explanation shown to the user
    pub notes: String,
}

impl CheckResult {
    /// Builds a result from its parts.
    pub fn new(
        entity: impl Into<String>,
        input_type: InputType,
        status: CheckStatus,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            input_type,
            status,
            notes: notes.into(),
        }
    }
}
