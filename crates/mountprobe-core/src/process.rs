use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

/// Normalized result of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// True iff the process exited with status code zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: diagnostic.into(),
        }
    }
}

/// Runs external collaborators (git, cargo, find, grep) with a timeout.
///
/// Attempt-once by contract: a timed-out or failed command is reported to
/// the caller as-is, never retried. The runner has no side effects of its
/// own and never logs or persists anything.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    default_timeout: Duration,
}

impl CommandRunner {
    pub fn new(default_timeout: Duration) -> Self {
        Self { default_timeout }
    }

    pub async fn run(&self, argv: &[&str]) -> CommandOutput {
        self.run_with_timeout(argv, self.default_timeout).await
    }

    /// Spawns `argv` and waits for it to exit, capturing output as text.
    ///
    /// On timeout the child is torn down via `kill_on_drop` and the result
    /// is `(false, "", "Command timed out")`; a spawn failure yields the
    /// underlying error text in `stderr`.
    pub async fn run_with_timeout(&self, argv: &[&str], timeout: Duration) -> CommandOutput {
        let Some((program, args)) = argv.split_first() else {
            return CommandOutput::failed("empty command line");
        };

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(timeout, output).await {
            Err(_) => CommandOutput::failed("Command timed out"),
            Ok(Err(e)) => CommandOutput::failed(e.to_string()),
            Ok(Ok(out)) => CommandOutput {
                success: out.status.success(),
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> CommandRunner {
        CommandRunner::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn zero_exit_is_success() {
        let out = runner().run(&["sh", "-c", "echo hello"]).await;
        assert!(out.success);
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn nonzero_exit_is_failure_with_captured_stderr() {
        let out = runner().run(&["sh", "-c", "echo oops >&2; exit 3"]).await;
        assert!(!out.success);
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[tokio::test]
    async fn missing_binary_is_normalized_not_propagated() {
        let out = runner().run(&["mountprobe-no-such-binary"]).await;
        assert!(!out.success);
        assert!(out.stdout.is_empty());
        assert!(!out.stderr.is_empty());
    }

    #[tokio::test]
    async fn timeout_yields_the_fixed_diagnostic() {
        let out = runner()
            .run_with_timeout(&["sleep", "5"], Duration::from_millis(100))
            .await;
        assert!(!out.success);
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr, "Command timed out");
    }

    #[tokio::test]
    async fn empty_argv_is_rejected() {
        let out = runner().run(&[]).await;
        assert!(!out.success);
    }
}
