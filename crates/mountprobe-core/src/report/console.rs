use tracing::info;

use crate::report::RunReport;

/// Logs the human-readable run summary, mirroring the persisted totals.
pub fn log_summary(report: &RunReport) {
    info!("Test Summary:");
    info!("Total Tests: {}", report.total_tests);
    info!("Passed: {}", report.passed_tests);
    info!("Failed: {}", report.failed_tests);
    info!("Success Rate: {:.1}%", report.success_rate);
    info!("Total Duration: {:.2}s", report.total_duration);
}
