//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - Lookup tables (built-in or loaded from a JSON file)
//! - The classifier that shares them

mod logger;

use std::sync::Arc;

use log::{debug, info};

use crate::classifier::Classifier;
use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::known_entries::KnownEntries;

// Re-export public API
pub use logger::init_logger_with;

/// Builds the lookup tables named by `config`.
///
/// Loads `config.database` when set, otherwise uses the built-in tables.
///
/// # Errors
///
/// Returns `InitializationError::DatabaseError` if the table file cannot be
/// read or is invalid.
pub fn init_known_entries(config: &Config) -> Result<Arc<KnownEntries>, InitializationError> {
    let entries = match &config.database {
        Some(path) => {
            info!("Loading lookup tables from {}", path.display());
            KnownEntries::from_path(path)?
        }
        None => {
            debug!("Using built-in lookup tables");
            KnownEntries::builtin()
        }
    };
    Ok(Arc::new(entries))
}

/// Builds a classifier over the tables named by `config`.
///
/// # Errors
///
/// Same as [`init_known_entries`].
pub fn init_classifier(config: &Config) -> Result<Classifier, InitializationError> {
    Ok(Classifier::new(init_known_entries(config)?))
}
