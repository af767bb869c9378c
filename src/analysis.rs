//! The deferred "analyzing" step in front of classification.

use std::time::Duration;

use log::debug;

use crate::classifier::Classifier;
use crate::models::CheckResult;

/// Outcome of an analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// Nothing was submitted; the user should be prompted instead.
    EmptyInput,
    /// The input was classified.
    Completed(CheckResult),
}

impl Analysis {
    /// The classification result, if there was one.
    pub fn result(&self) -> Option<&CheckResult> {
        match self {
            Analysis::EmptyInput => None,
            Analysis::Completed(result) => Some(result),
        }
    }
}

/// Classifies `raw` after the "analyzing" delay.
///
/// Empty input returns [`Analysis::EmptyInput`] straight away, without waiting
/// or classifying. Whitespace-only input is not empty; it is classified (and
/// lands in the unrecognized branch). A zero `delay` skips the sleep.
pub async fn analyze(classifier: &Classifier, raw: &str, delay: Duration) -> Analysis {
    if raw.is_empty() {
        debug!("Empty input, nothing to analyze");
        return Analysis::EmptyInput;
    }

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Analysis::Completed(classifier.classify(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckStatus, InputType};

    #[tokio::test]
    async fn test_analyze_empty_input() {
        let classifier = Classifier::default();
        let analysis = analyze(&classifier, "", Duration::from_secs(60)).await;
        assert_eq!(analysis, Analysis::EmptyInput);
        assert!(analysis.result().is_none());
    }

    #[tokio::test]
    async fn test_analyze_whitespace_is_classified() {
        let classifier = Classifier::default();
        let analysis = analyze(&classifier, "   ", Duration::ZERO).await;
        let result = analysis.result().unwrap();
        assert_eq!(result.input_type, InputType::Unknown);
        assert_eq!(result.entity, "N/A");
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_waits_for_delay() {
        let classifier = Classifier::default();
        let start = tokio::time::Instant::now();
        let analysis = analyze(&classifier, "https://shopee.co.id", Duration::from_millis(500)).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(analysis.result().unwrap().status, CheckStatus::Secure);
    }
}
