//! Error handling.
//!
//! Errors are categorized into:
//! - **Initialization**: logger setup and lookup table loading
//! - **Database**: reading and validating a lookup table file
//! - **Scan**: camera frame source failures
//!
//! Unmatched inputs and unparseable QRIS fields are not errors; they degrade to
//! `UNKNOWN` results and the "not found" sentinel.

mod types;

// Re-export public API
pub use types::{DatabaseError, InitializationError, ScanError};
