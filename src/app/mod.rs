//! Main application modules.
//!
//! This module provides batch input reading and the per-status summary used by
//! the `check` and `batch` runs.

pub mod input;
pub mod statistics;

// Re-export public API
pub use input::read_inputs;
pub use statistics::StatusCounts;
