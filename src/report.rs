//! Rendering of check results for the terminal.

use colored::*;
use serde::Serialize;

use crate::analysis::Analysis;
use crate::config::{OutputFormat, EMPTY_INPUT_PROMPT};
use crate::models::{CheckResult, CheckStatus};

/// Style class for a status (`malicious`, `valid`, `secure`, `unknown`).
pub fn status_class(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Malicious => "malicious",
        CheckStatus::Valid => "valid",
        CheckStatus::Secure => "secure",
        CheckStatus::Unknown => "unknown",
    }
}

/// User-facing label for a status.
pub fn status_display(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Malicious => "⚠️ BERBAHAYA ⚠️",
        CheckStatus::Valid => "✅ VALID ✅",
        CheckStatus::Secure => "🔒 AMAN 🔒",
        CheckStatus::Unknown => "❓ TIDAK DIKETAHUI ❓",
    }
}

fn styled_status(status: CheckStatus) -> ColoredString {
    let label = status_display(status);
    match status {
        CheckStatus::Malicious => label.red().bold(),
        CheckStatus::Valid => label.green().bold(),
        CheckStatus::Secure => label.blue().bold(),
        CheckStatus::Unknown => label.yellow(),
    }
}

/// Multi-line, coloured report for one result.
pub fn render_plain(result: &CheckResult) -> String {
    format!(
        "Tipe Terdeteksi: {}\nEntitas/Domain: {}\nStatus: {}\nCatatan: {}",
        result.input_type,
        result.entity,
        styled_status(result.status),
        result.notes
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a CheckResult,
    status_display: &'static str,
    style_class: &'static str,
}

#[derive(Serialize)]
struct JsonPrompt {
    message: &'static str,
    style_class: &'static str,
}

/// One-line JSON object for one result, with display label and style class.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_json(result: &CheckResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonReport {
        result,
        status_display: status_display(result.status),
        style_class: status_class(result.status),
    })
}

/// Renders an analysis outcome in the requested format.
///
/// Empty input renders the prompt asking the user for data, styled as unknown.
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn render_analysis(
    analysis: &Analysis,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match (analysis, format) {
        (Analysis::Completed(result), OutputFormat::Plain) => Ok(render_plain(result)),
        (Analysis::Completed(result), OutputFormat::Json) => render_json(result),
        (Analysis::EmptyInput, OutputFormat::Plain) => Ok(EMPTY_INPUT_PROMPT.yellow().to_string()),
        (Analysis::EmptyInput, OutputFormat::Json) => serde_json::to_string(&JsonPrompt {
            message: EMPTY_INPUT_PROMPT,
            style_class: status_class(CheckStatus::Unknown),
        }),
    }
}
