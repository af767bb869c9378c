//! Built-in demo lookup tables.

use crate::models::CheckStatus;

/// A built-in table row: key, entity, status, notes.
pub(super) type BuiltinEntry = (&'static str, &'static str, CheckStatus, &'static str);

pub(super) const QRIS_ENTRIES: &[BuiltinEntry] = &[
    (
        "00020101021126750023COM.BANKSUMSELBABEL.WWW01189360012001201481730215BSB0100000481730303UMI51440014ID.CO.QRIS.WWW0215ID10221613974200303UMI5204931153033605802ID5915DINAS PERIKANAN6014BELITUNG TIMUR61053351262070703A01630484BA",
        "Dinas Perikanan Kabupaten Belitung Timur",
        CheckStatus::Valid,
        "QRIS sah untuk pembayaran instansi pemerintah daerah.",
    ),
    (
        "00020101021126570011ID.DANA.WWW011893600915322828596602092282859660303UMI51440014ID.CO.QRIS.WWW0215ID10221507974320303UMI5204899953033605802ID5915NCP Asuransi Ku6015Kota Jakarta Ut61051425063049F24",
        "NCP Asuransi Ku",
        CheckStatus::Valid,
        "Terlihat sebagai QRIS yang valid untuk entitas asuransi.",
    ),
    (
        "00020101021226580013ID.CO.BRI.WWW01189360000200700826970208700826970303UMI51440014ID.CO.QRIS.WWW0215ID10253854300340303UMI520452115303360540732018185502025605799125802ID5924PENGEMBALIAN-DANA-TIKTOK6013JAKARTA PUSAT61051012062070703A0163040E1F",
        "PENGEMBALIAN-DANA-TIKTOK",
        CheckStatus::Malicious,
        "Diduga QRIS phishing. Sering digunakan dalam penipuan 'paket tertukar' atau 'pengembalian dana'.",
    ),
    (
        "00020101021126660014ID.LINKAJA.WWW011893600911002162700102151802110116270010303UME51440014ID.CO.QRIS.WWW02151802110116270010303UME5204111153033605802ID5916RESTORASI MASJID6005MEDAN61052015362400716377B6EAF-F97B-41981602126281165802586304A749",
        "RESTORASI MASJID",
        CheckStatus::Malicious,
        "Umumnya digunakan dalam penipuan amal palsu untuk masjid atau donasi.",
    ),
];

pub(super) const URL_ENTRIES: &[BuiltinEntry] = &[
    (
        "http://bit.ly/shopeebigsale662",
        "bit.ly/shopeebigsale662",
        CheckStatus::Malicious,
        "URL singkat yang sering digunakan untuk phishing atau pengalihan berbahaya. Tampaknya promosi Shopee palsu.",
    ),
    (
        "https://shopee.co.id",
        "shopee.co.id",
        CheckStatus::Secure,
        "Domain resmi dan aman untuk Shopee Indonesia.",
    ),
];
