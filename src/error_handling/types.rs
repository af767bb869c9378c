//! Error type definitions.
//!
//! This module defines all error types used throughout the application. The
//! classification path itself never fails; these cover start-up and the camera
//! scan session.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error loading the lookup tables.
    #[error("Lookup table initialization error: {0}")]
    DatabaseError(#[from] DatabaseError),
}

/// Error types for loading lookup tables from disk.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The table file could not be read.
    #[error("Failed to read lookup table file {path}: {source}")]
    Io {
        /// Path of the table file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The table file is not valid JSON or does not match the expected shape.
    #[error("Failed to parse lookup table file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The same key appears twice in one table.
    #[error("Duplicate {table} key in lookup table: {key}")]
    DuplicateKey {
        /// Table name (`qris` or `urls`)
        table: &'static str,
        /// The repeated key
        key: String,
    },

    /// A key is empty or whitespace only, so it could never match trimmed input.
    #[error("Empty {table} key in lookup table")]
    EmptyKey {
        /// Table name (`qris` or `urls`)
        table: &'static str,
    },
}

/// Error types for a camera scan session.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The frame source could not be opened (no camera, permission denied).
    ///
    /// Fatal for the session; the scan loop does not retry.
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    /// The background scan task panicked or was aborted before finishing.
    #[error("Scan task aborted: {0}")]
    TaskAborted(String),
}
