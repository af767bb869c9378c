//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `qris_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use qris_check::initialization::{init_classifier, init_logger_with};
use qris_check::{run_batch, run_check, Config, LogFormat, LogLevel, OutputFormat, RunReport};

/// Exit code when `--fail-on-malicious` is set and a malicious input was found.
const EXIT_MALICIOUS: i32 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "qris_check",
    version,
    about = "Classify URLs and QRIS payment payloads against known entries"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// JSON file with lookup tables (defaults to the built-in tables)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// "Analyzing" delay before a single check, in milliseconds
    #[arg(long, global = true, default_value_t = qris_check::config::DEFAULT_ANALYSIS_DELAY_MS)]
    delay_ms: u64,

    /// Exit with code 2 if any input is classified as malicious
    #[arg(long, global = true)]
    fail_on_malicious: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a single URL or QRIS payload
    Check {
        /// The URL or QRIS payload (quote it; may be empty)
        input: String,
    },
    /// Classify every line of a file (`-` reads stdin)
    Batch {
        /// Input file, one URL or QRIS payload per line
        file: PathBuf,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            output: self.output,
            database: self.database.clone(),
            delay_ms: self.delay_ms,
            fail_on_malicious: self.fail_on_malicious,
        }
    }
}

fn exit_code(config: &Config, report: &RunReport) -> i32 {
    if config.fail_on_malicious && report.has_malicious() {
        EXIT_MALICIOUS
    } else {
        0
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set RUST_LOG; a missing file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let classifier = match init_classifier(&config) {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("qris_check error: {:#}", e);
            process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let outcome = match &cli.command {
        Command::Check { input } => run_check(&config, &classifier, input, &mut stdout).await,
        Command::Batch { file } => run_batch(&config, &classifier, file, &mut stdout).await,
    };

    match outcome {
        Ok(report) => {
            let code = exit_code(&config, &report);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("qris_check error: {:#}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qris_check::StatusCounts;

    fn report(malicious: bool) -> RunReport {
        let mut counts = StatusCounts::new();
        counts.record(
            qris_check::InputType::Url,
            if malicious {
                qris_check::CheckStatus::Malicious
            } else {
                qris_check::CheckStatus::Secure
            },
        );
        RunReport {
            total_inputs: 1,
            counts,
            elapsed_seconds: 0.0,
        }
    }

    #[test]
    fn test_exit_code() {
        let mut config = Config::default();
        assert_eq!(exit_code(&config, &report(true)), 0);
        config.fail_on_malicious = true;
        assert_eq!(exit_code(&config, &report(true)), EXIT_MALICIOUS);
        assert_eq!(exit_code(&config, &report(false)), 0);
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from(["qris_check", "check", "https://shopee.co.id"]).unwrap();
        match &cli.command {
            Command::Check { input } => assert_eq!(input, "https://shopee.co.id"),
            other => panic!("unexpected command {:?}", other),
        }
        let config = cli.config();
        assert_eq!(config.delay_ms, 500);
        assert_eq!(config.output, OutputFormat::Plain);
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "qris_check",
            "batch",
            "-",
            "--output",
            "json",
            "--delay-ms",
            "0",
            "--fail-on-malicious",
            "--database",
            "tables.json",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.delay_ms, 0);
        assert!(config.fail_on_malicious);
        assert_eq!(config.database, Some(PathBuf::from("tables.json")));
        assert!(matches!(cli.command, Command::Batch { .. }));
    }

    #[test]
    fn test_cli_accepts_empty_input() {
        let cli = Cli::try_parse_from(["qris_check", "check", ""]).unwrap();
        assert!(matches!(&cli.command, Command::Check { input } if input.is_empty()));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["qris_check"]).is_err());
    }
}
