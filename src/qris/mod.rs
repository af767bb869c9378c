//! QRIS merchant name extraction.
//!
//! A QRIS payload is an EMV-QR tag-length-value string: two-digit tag, two-digit
//! length, then `length` characters of value. Only tag `59` (merchant name) is
//! read here.
//!
//! Extraction runs in two steps:
//! - [`find_merchant_field()`] locates the first `59` + two digits followed by a
//!   run of non-digit characters
//! - [`MerchantField::resolve()`] checks the captured run against the declared
//!   length and, when they disagree, re-slices the value by the declared length
//!
//! The declared length always wins over where the non-digit run happens to stop.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::{MERCHANT_NOT_FOUND, QRIS_MARKER, QRIS_PREFIX};

// Tag, two length digits, then a greedy run of anything that is not an ASCII digit.
static MERCHANT_FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"59([0-9]{2})([^0-9]+)").expect("merchant field pattern is a valid regex")
});

/// A tag `59` field candidate found in a QRIS payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantField<'a> {
    /// Length declared by the two digits after the tag
    pub declared_len: usize,
    /// The non-digit run the pattern captured
    pub captured: &'a str,
    /// Everything from the first value character to the end of the payload
    tail: &'a str,
}

impl<'a> MerchantField<'a> {
    /// Whether the captured run has exactly the declared number of characters.
    pub fn is_consistent(&self) -> bool {
        self.captured.chars().count() == self.declared_len
    }

    /// Returns the merchant name, trusting the declared length.
    ///
    /// When the captured run already has the declared length it is returned
    /// as is. Otherwise exactly `declared_len` characters are taken from the
    /// start of the value. If the payload ends first, whatever remains is
    /// returned.
    pub fn resolve(&self) -> String {
        if self.is_consistent() {
            return self.captured.to_string();
        }

        let value: String = self.tail.chars().take(self.declared_len).collect();
        debug!(
            "Merchant name run had {} chars but field declares {}; using {:?}",
            self.captured.chars().count(),
            self.declared_len,
            value
        );
        value
    }
}

/// Locates the first tag `59` field in `qris`.
///
/// Returns `None` when no `59` + two digits is followed by at least one
/// non-digit character.
pub fn find_merchant_field(qris: &str) -> Option<MerchantField<'_>> {
    let caps = MERCHANT_FIELD_PATTERN.captures(qris)?;
    let length_digits = caps.get(1)?;
    let captured = caps.get(2)?;
    let declared_len = length_digits.as_str().parse::<usize>().ok()?;

    Some(MerchantField {
        declared_len,
        captured: captured.as_str(),
        tail: &qris[captured.start()..],
    })
}

/// Extracts the merchant name (tag `59`) from a QRIS payload.
///
/// Returns `"Tidak Ditemukan"` when the payload has no recognisable tag 59 field.
///
/// # Examples
///
/// ```
/// use qris_check::qris::extract_merchant_name;
///
/// assert_eq!(extract_merchant_name("5802ID5909TOKO MAJU6007JAKARTA"), "TOKO MAJU");
/// assert_eq!(extract_merchant_name("5802ID5910SomeShop996007JAKARTA"), "SomeShop99");
/// assert_eq!(extract_merchant_name("no merchant here"), "Tidak Ditemukan");
/// ```
pub fn extract_merchant_name(qris: &str) -> String {
    match find_merchant_field(qris) {
        Some(field) => field.resolve(),
        None => MERCHANT_NOT_FOUND.to_string(),
    }
}

/// Whether `input` has the shape of a QRIS payload.
///
/// Checks the EMV-QR payload format indicator prefix and the QRIS merchant
/// account marker. No checksum or TLV validation is performed.
pub fn looks_like_qris(input: &str) -> bool {
    input.starts_with(QRIS_PREFIX) && input.contains(QRIS_MARKER)
}
