pub mod console;
pub mod json;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::CheckOutcome;

/// Aggregate of all outcomes plus summary statistics for one run.
///
/// Constructed once per invocation, finalized and persisted exactly once,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    /// Wall-clock seconds for the battery. Mount-wait time is excluded; the
    /// gate measures it separately and fails the run fast when exceeded.
    pub total_duration: f64,
    /// `passed / total * 100`; 0.0 for an empty battery.
    pub success_rate: f64,
    /// Outcomes in invocation order.
    pub results: Vec<CheckOutcome>,
}

impl RunReport {
    pub fn from_outcomes(results: Vec<CheckOutcome>, total_duration: Duration) -> Self {
        let total_tests = results.len();
        let passed_tests = results.iter().filter(|r| r.success).count();
        let failed_tests = total_tests - passed_tests;
        let success_rate = if total_tests > 0 {
            passed_tests as f64 / total_tests as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_tests,
            passed_tests,
            failed_tests,
            total_duration: total_duration.as_secs_f64(),
            success_rate,
            results,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed_tests == 0
    }
}
