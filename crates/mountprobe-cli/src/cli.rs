use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use mountprobe_core::HarnessConfig;

/// End-to-end verification harness for a mounted remote filesystem.
///
/// A bare invocation uses the fixed deployment conventions; every knob can
/// also be set through the environment for containerized runs.
#[derive(Debug, Parser)]
#[command(name = "mountprobe", version, about)]
pub struct Cli {
    /// Path under which the remote filesystem is expected to be attached
    #[arg(long, env = "MOUNTPROBE_MOUNT_POINT", default_value = "/app/mount")]
    pub mount_point: PathBuf,

    /// Directory receiving the JSON report and the log file
    #[arg(long, env = "MOUNTPROBE_RESULTS_DIR", default_value = "/app/test-results")]
    pub results_dir: PathBuf,

    /// Seconds to wait for the mount before aborting the run
    #[arg(long, env = "MOUNTPROBE_MOUNT_TIMEOUT_SECS", default_value_t = 60)]
    pub mount_timeout_secs: u64,

    /// Default timeout in seconds for external commands
    #[arg(long, env = "MOUNTPROBE_COMMAND_TIMEOUT_SECS", default_value_t = 30)]
    pub command_timeout_secs: u64,
}

impl Cli {
    pub fn into_config(self) -> HarnessConfig {
        HarnessConfig {
            mount_point: self.mount_point,
            results_dir: self.results_dir,
            mount_timeout: Duration::from_secs(self.mount_timeout_secs),
            command_timeout: Duration::from_secs(self.command_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_matches_the_deployment_defaults() {
        let cli = Cli::parse_from(["mountprobe"]);
        let config = cli.into_config();
        assert_eq!(config.mount_point, PathBuf::from("/app/mount"));
        assert_eq!(config.results_dir, PathBuf::from("/app/test-results"));
        assert_eq!(config.mount_timeout, Duration::from_secs(60));
        assert_eq!(config.command_timeout, Duration::from_secs(30));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "mountprobe",
            "--mount-point",
            "/mnt/remote",
            "--mount-timeout-secs",
            "5",
        ]);
        let config = cli.into_config();
        assert_eq!(config.mount_point, PathBuf::from("/mnt/remote"));
        assert_eq!(config.mount_timeout, Duration::from_secs(5));
    }
}
