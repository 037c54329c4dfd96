use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a single harness run.
///
/// Passed into [`crate::Runner`] at construction; there is no global state.
/// Defaults match the fixed deployment conventions of the target container.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Path under which the remote filesystem is expected to be attached.
    pub mount_point: PathBuf,
    /// Directory receiving the JSON report and the log file.
    pub results_dir: PathBuf,
    /// How long to wait for the mount to come up before aborting the run.
    pub mount_timeout: Duration,
    /// Default timeout for external commands spawned by checks.
    pub command_timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            mount_point: PathBuf::from("/app/mount"),
            results_dir: PathBuf::from("/app/test-results"),
            mount_timeout: Duration::from_secs(60),
            command_timeout: Duration::from_secs(30),
        }
    }
}

impl HarnessConfig {
    /// Location of the persisted JSON report.
    pub fn report_path(&self) -> PathBuf {
        self.results_dir.join("e2e_test_results.json")
    }

    /// Location of the human-readable log file.
    pub fn log_path(&self) -> PathBuf {
        self.results_dir.join("e2e_test.log")
    }
}
