//! Logger initialization.
//!
//! Log records go to stderr so that reports on stdout stay machine-readable.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate and as
/// the global default. Plain output prefixes each record with an emoji and a
/// coloured level; JSON output writes one object per line with a millisecond
/// timestamp.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug qris_check check https://shopee.co.id
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug qris_check --log-level info batch inputs.txt
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    builder.filter_level(level);
    builder.filter_module("qris_check", level);

    match format {
        LogFormat::Json => builder.format(format_json),
        LogFormat::Plain => builder.format(format_plain),
    };

    // try_init() so repeated initialization (tests) returns an error instead of panicking
    builder.try_init()?;
    Ok(())
}

fn format_json(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(buf, "{}", json_line(chrono::Utc::now().timestamp_millis(), record))
}

fn format_plain(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(
        buf,
        "{} {} [{}] {}",
        level_emoji(record.level()),
        record.target().cyan(),
        colored_level(record.level()),
        record.args()
    )
}

fn json_line(ts_millis: i64, record: &Record) -> String {
    let msg = serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into());
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        ts_millis,
        record.level(),
        record.target(),
        msg
    )
}

fn colored_level(level: Level) -> ColoredString {
    let label = level.to_string();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

fn level_emoji(level: Level) -> &'static str {
    match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_escapes_message() {
        let line = json_line(
            1_700_000_000_000,
            &Record::builder()
                .args(format_args!("entity \"RESTORASI MASJID\"\nflagged"))
                .level(Level::Warn)
                .target("qris_check::classifier")
                .build(),
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts"], 1_700_000_000_000i64);
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "qris_check::classifier");
        assert_eq!(value["msg"], "entity \"RESTORASI MASJID\"\nflagged");
    }

    #[test]
    fn test_every_level_has_emoji() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            assert!(!level_emoji(level).is_empty());
            assert!(colored_level(level).to_string().contains(&level.to_string()));
        }
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        // Only the first installation in this process can succeed
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
