use std::path::PathBuf;

use thiserror::Error;

/// Top-level harness errors.
///
/// Check-internal faults never surface here; they are converted into failing
/// [`crate::CheckOutcome`]s at the engine boundary and the run continues.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The mount never became ready within the configured window. The whole
    /// run is aborted: no checks run, nothing is persisted.
    #[error("Mount timeout")]
    MountTimeout,

    #[error("failed to serialize report")]
    ReportSerialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
