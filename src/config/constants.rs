//! Configuration constants.
//!
//! Fixed strings and defaults shared by the classifier, the QRIS extractor and
//! the report renderer.

/// Delay applied before classification to give the user "analyzing" feedback.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 500;

// QRIS detection
/// Every QRIS payload starts with the EMV-QR payload format indicator (tag 00, len 02, "01").
pub const QRIS_PREFIX: &str = "000201";
/// Merchant account information marker present in every QRIS payload.
pub const QRIS_MARKER: &str = "ID.CO.QRIS.WWW";
/// Returned when no tag 59 field can be located.
pub const MERCHANT_NOT_FOUND: &str = "Tidak Ditemukan";

/// Substrings that route non-URL text into the URL branch.
pub const DEFAULT_URL_HINTS: &[&str] = &["bit.ly", "shopee.co.id"];

/// Entity reported when the input format is not recognized.
pub const UNRECOGNIZED_ENTITY: &str = "N/A";

// Fallback notes
/// Notes for a URL missing from the URL table.
pub const NOTES_UNKNOWN_URL: &str =
    "URL tidak ada di database dummy. Perlu analisis lebih lanjut (misalnya, cek reputasi, scan konten).";
/// Notes for a QRIS payload missing from the QRIS table.
pub const NOTES_UNKNOWN_QRIS: &str =
    "Data QRIS tidak ada di database dummy. Validasi lebih lanjut (misalnya, checksum, verifikasi merchant) diperlukan.";
/// Notes for input that is neither a URL nor a QRIS payload.
pub const NOTES_UNRECOGNIZED: &str =
    "Format input tidak dikenali sebagai URL standar atau string QRIS.";

/// Shown instead of a report when the user submits nothing.
pub const EMPTY_INPUT_PROMPT: &str = "Silakan masukkan data untuk dianalisis.";
