// Shared test helpers: payload fixtures and classifier construction.

use std::sync::Arc;

use qris_check::{Classifier, KnownEntries};

/// The "RESTORASI MASJID" payload from the built-in QRIS table (malicious).
#[allow(dead_code)]
pub const RESTORASI_MASJID: &str = "00020101021126660014ID.LINKAJA.WWW011893600911002162700102151802110116270010303UME51440014ID.CO.QRIS.WWW02151802110116270010303UME5204111153033605802ID5916RESTORASI MASJID6005MEDAN61052015362400716377B6EAF-F97B-41981602126281165802586304A749";

/// The "NCP Asuransi Ku" payload from the built-in QRIS table (valid).
#[allow(dead_code)]
pub const NCP_ASURANSI: &str = "00020101021126570011ID.DANA.WWW011893600915322828596602092282859660303UMI51440014ID.CO.QRIS.WWW0215ID10221507974320303UMI5204899953033605802ID5915NCP Asuransi Ku6015Kota Jakarta Ut61051425063049F24";

/// A QRIS payload that is not in any table; tag 59 declares 10 characters
/// and the name ends in digits.
#[allow(dead_code)]
pub const UNLISTED_SHOP: &str = "00020101021126570011ID.DANA.WWW51440014ID.CO.QRIS.WWW5802ID5910SomeShop99996007JAKARTA6304ABCD";

/// A classifier over the built-in tables.
#[allow(dead_code)]
pub fn builtin_classifier() -> Classifier {
    Classifier::new(Arc::new(KnownEntries::builtin()))
}
