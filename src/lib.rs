//! qris_check library: URL and QRIS payload classification
//!
//! This library classifies a user-supplied string (a URL or an Indonesian QRIS
//! payment payload) against tables of known-good and known-malicious entries,
//! and extracts the merchant name from QRIS payloads it does not know.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use qris_check::{CheckStatus, Classifier, InputType, KnownEntries};
//!
//! let classifier = Classifier::new(Arc::new(KnownEntries::builtin()));
//!
//! let result = classifier.classify("http://bit.ly/shopeebigsale662");
//! assert_eq!(result.input_type, InputType::Url);
//! assert_eq!(result.status, CheckStatus::Malicious);
//!
//! let result = classifier.classify("random text");
//! assert_eq!(result.input_type, InputType::Unknown);
//! assert_eq!(result.entity, "N/A");
//! ```
//!
//! # Requirements
//!
//! Classification is synchronous. The `run_*` entry points, [`analyze`] and the
//! [`scanner`] loop need a Tokio runtime.

#![warn(missing_docs)]

pub mod analysis;
mod app;
pub mod classifier;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod known_entries;
pub mod models;
pub mod qris;
pub mod report;
pub mod scanner;

// Re-export public API
pub use analysis::{analyze, Analysis};
pub use app::StatusCounts;
pub use classifier::Classifier;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use known_entries::KnownEntries;
pub use models::{CheckResult, CheckStatus, InputType};
pub use qris::extract_merchant_name;
pub use run::{run_batch, run_check, RunReport};

// Internal run module (drives analysis and writes reports)
mod run {
    use std::io::Write;
    use std::path::Path;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::analysis::{analyze, Analysis};
    use crate::app::{read_inputs, StatusCounts};
    use crate::classifier::Classifier;
    use crate::config::Config;
    use crate::models::CheckStatus;
    use crate::report::render_analysis;

    /// Summary of a `check` or `batch` run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of inputs classified (empty input is not counted)
        pub total_inputs: usize,
        /// Counts by status and input type
        pub counts: StatusCounts,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl RunReport {
        /// Whether any input was classified as malicious.
        pub fn has_malicious(&self) -> bool {
            self.counts.get(CheckStatus::Malicious) > 0
        }
    }

    /// Analyzes a single input and writes its report to `out`.
    ///
    /// Waits for the configured "analyzing" delay first. Empty input writes the
    /// prompt instead of a report.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be rendered or written.
    pub async fn run_check<W: Write>(
        config: &Config,
        classifier: &Classifier,
        input: &str,
        out: &mut W,
    ) -> Result<RunReport> {
        let start = Instant::now();
        let mut counts = StatusCounts::new();

        let analysis = analyze(classifier, input, config.analysis_delay()).await;
        emit(config, &analysis, &mut counts, out)?;

        Ok(RunReport {
            total_inputs: counts.total(),
            counts,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    /// Analyzes every input in `file` (`-` for stdin) and writes one report each.
    ///
    /// Batch runs skip the "analyzing" delay. A per-status summary is logged at
    /// the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or a report cannot be
    /// rendered or written.
    pub async fn run_batch<W: Write>(
        config: &Config,
        classifier: &Classifier,
        file: &Path,
        out: &mut W,
    ) -> Result<RunReport> {
        let start = Instant::now();
        let inputs = read_inputs(file).await?;
        let mut counts = StatusCounts::new();

        for (index, input) in inputs.iter().enumerate() {
            if index > 0 && matches!(config.output, crate::config::OutputFormat::Plain) {
                writeln!(out).context("Failed to write report")?;
            }
            let analysis = analyze(classifier, input, Duration::ZERO).await;
            emit(config, &analysis, &mut counts, out)?;
        }

        counts.log_summary();
        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!("Batch finished in {:.2}s", elapsed_seconds);

        Ok(RunReport {
            total_inputs: counts.total(),
            counts,
            elapsed_seconds,
        })
    }

    fn emit<W: Write>(
        config: &Config,
        analysis: &Analysis,
        counts: &mut StatusCounts,
        out: &mut W,
    ) -> Result<()> {
        if let Some(result) = analysis.result() {
            counts.record(result.input_type, result.status);
            if result.status == CheckStatus::Malicious {
                warn!("Malicious {} detected: {}", result.input_type, result.entity);
            }
        }
        let rendered =
            render_analysis(analysis, config.output).context("Failed to render report")?;
        writeln!(out, "{}", rendered).context("Failed to write report")?;
        Ok(())
    }
}
