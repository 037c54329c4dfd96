use std::path::Path;

use crate::errors::HarnessError;
use crate::report::RunReport;

/// Persists the report as pretty-printed JSON. Called exactly once per run,
/// after the battery completes; never on a mount-timeout abort.
pub fn write_json(report: &RunReport, out: &Path) -> Result<(), HarnessError> {
    let body = serde_json::to_string_pretty(report)?;
    std::fs::write(out, body).map_err(|e| HarnessError::ReportWrite {
        path: out.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CheckOutcome;
    use std::time::Duration;

    #[test]
    fn persisted_shape_matches_the_report_contract() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("e2e_test_results.json");

        let report = RunReport::from_outcomes(
            vec![
                CheckOutcome::pass(
                    "basic_connectivity",
                    Duration::from_millis(12),
                    Some(serde_json::json!({ "files_found": 4 })),
                ),
                CheckOutcome::fail("file_operations", Duration::from_millis(7), "mismatch"),
            ],
            Duration::from_secs(1),
        );
        write_json(&report, &out).unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["total_tests"], 2);
        assert_eq!(v["passed_tests"], 1);
        assert_eq!(v["failed_tests"], 1);
        assert_eq!(v["success_rate"], 50.0);
        assert_eq!(v["results"][0]["name"], "basic_connectivity");
        assert!(v["results"][0]["error"].is_null());
        assert_eq!(v["results"][1]["error"], "mismatch");
        assert!(v["results"][1]["details"].is_null());
    }

    #[test]
    fn unwritable_destination_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("e2e_test_results.json");

        let report = RunReport::from_outcomes(Vec::new(), Duration::ZERO);
        let err = write_json(&report, &out).unwrap_err();
        assert!(matches!(err, HarnessError::ReportWrite { .. }));
    }
}
