//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::DEFAULT_ANALYSIS_DELAY_MS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured, labelled report lines
    Plain,
    /// One JSON object per result
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use qris_check::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     database: Some(PathBuf::from("entries.json")),
///     delay_ms: 0,
///     ..Default::default()
/// };
/// assert!(config.analysis_delay().is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report format
    pub output: OutputFormat,

    /// JSON file with lookup tables (built-in tables when `None`)
    pub database: Option<PathBuf>,

    /// "Analyzing" delay before each classification, in milliseconds
    pub delay_ms: u64,

    /// Exit with a non-zero code when any input is classified as malicious
    pub fail_on_malicious: bool,
}

impl Config {
    /// The configured analysis delay as a `Duration`.
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
            database: None,
            delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            fail_on_malicious: false,
        }
    }
}
