//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed strings and defaults (prefixes, sentinel, notes, delay)
//! - CLI option types and the library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
