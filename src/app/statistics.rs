//! Per-status counts for batch runs.

use std::collections::HashMap;

use log::info;
use strum::IntoEnumIterator;

use crate::models::{CheckStatus, InputType};

/// Counts of results by status and by detected input type.
///
/// Every status and input type is present from construction with a zero count.
#[derive(Debug, Clone)]
pub struct StatusCounts {
    statuses: HashMap<CheckStatus, usize>,
    input_types: HashMap<InputType, usize>,
}

impl StatusCounts {
    /// Creates counters with every status and input type at zero.
    pub fn new() -> Self {
        StatusCounts {
            statuses: CheckStatus::iter().map(|s| (s, 0)).collect(),
            input_types: InputType::iter().map(|t| (t, 0)).collect(),
        }
    }

    /// Records one classified input.
    pub fn record(&mut self, input_type: InputType, status: CheckStatus) {
        *self.statuses.entry(status).or_insert(0) += 1;
        *self.input_types.entry(input_type).or_insert(0) += 1;
    }

    /// Number of results with `status`.
    pub fn get(&self, status: CheckStatus) -> usize {
        self.statuses.get(&status).copied().unwrap_or(0)
    }

    /// Number of results detected as `input_type`.
    pub fn get_input_type(&self, input_type: InputType) -> usize {
        self.input_types.get(&input_type).copied().unwrap_or(0)
    }

    /// Number of classified inputs.
    pub fn total(&self) -> usize {
        self.statuses.values().sum()
    }

    /// Logs a summary: totals first, then every non-zero status and type.
    pub fn log_summary(&self) {
        let total = self.total();
        info!(
            "Checked {} input{} ({} malicious)",
            total,
            if total == 1 { "" } else { "s" },
            self.get(CheckStatus::Malicious)
        );
        for status in CheckStatus::iter() {
            let count = self.get(status);
            if count > 0 {
                info!("   {}: {}", status, count);
            }
        }
        for input_type in InputType::iter() {
            let count = self.get_input_type(input_type);
            if count > 0 {
                info!("   {} inputs: {}", input_type, count);
            }
        }
    }
}

impl Default for StatusCounts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_start_at_zero() {
        let counts = StatusCounts::new();
        for status in CheckStatus::iter() {
            assert_eq!(counts.get(status), 0);
        }
        for input_type in InputType::iter() {
            assert_eq!(counts.get_input_type(input_type), 0);
        }
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_status_counts_record() {
        let mut counts = StatusCounts::new();
        counts.record(InputType::Url, CheckStatus::Malicious);
        counts.record(InputType::Qris, CheckStatus::Malicious);
        counts.record(InputType::Unknown, CheckStatus::Unknown);

        assert_eq!(counts.get(CheckStatus::Malicious), 2);
        assert_eq!(counts.get(CheckStatus::Unknown), 1);
        assert_eq!(counts.get(CheckStatus::Secure), 0);
        assert_eq!(counts.get_input_type(InputType::Url), 1);
        assert_eq!(counts.get_input_type(InputType::Qris), 1);
        assert_eq!(counts.total(), 3);

        // Should not panic
        counts.log_summary();
    }
}
