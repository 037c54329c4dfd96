use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use crate::checks::{battery, Check, CheckContext};
use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::model::CheckOutcome;
use crate::mount;
use crate::process::CommandRunner;
use crate::report::RunReport;

/// Orchestrates one harness run: readiness gate, then the fixed battery,
/// then aggregation. Strictly sequential; the only shared state is the
/// growing result list owned here.
pub struct Runner {
    pub config: HarnessConfig,
    pub process: CommandRunner,
}

impl Runner {
    pub fn new(config: HarnessConfig) -> Self {
        let process = CommandRunner::new(config.command_timeout);
        Self { config, process }
    }

    /// Runs the whole battery and returns the finalized report.
    ///
    /// `Err(MountTimeout)` means the mount never came up: no checks ran and
    /// nothing should be persisted. The reported `total_duration` covers the
    /// battery only; the mount-wait phase is timed separately here.
    pub async fn run_battery(&self) -> Result<RunReport, HarnessError> {
        info!(
            "Waiting for filesystem mount at {}",
            self.config.mount_point.display()
        );
        let gate_started = Instant::now();
        if !mount::wait_for_mount(&self.config.mount_point, self.config.mount_timeout).await {
            error!(
                "Filesystem mount not ready within {}s",
                self.config.mount_timeout.as_secs()
            );
            return Err(HarnessError::MountTimeout);
        }
        info!("Mount ready after {:.2}s", gate_started.elapsed().as_secs_f64());

        let cx = CheckContext {
            mount: self.config.mount_point.clone(),
            process: self.process.clone(),
        };

        let battery_started = Instant::now();
        let results = run_checks(&cx, battery()).await;
        Ok(RunReport::from_outcomes(results, battery_started.elapsed()))
    }
}

/// Runs each check to completion in order, converting every fault into a
/// failing outcome. A failing or panicking check never stops the battery.
pub async fn run_checks(cx: &CheckContext, checks: Vec<Arc<dyn Check>>) -> Vec<CheckOutcome> {
    let mut results = Vec::with_capacity(checks.len());
    for check in checks {
        let name = check.name();
        info!("Running {name}...");
        let started = Instant::now();
        let cx_task = cx.clone();
        // Spawned so a panic inside a check surfaces as a join error
        // instead of tearing down the run.
        let handle = tokio::spawn(async move { check.run(&cx_task).await });
        let outcome = match handle.await {
            Ok(Ok(details)) => CheckOutcome::pass(name, started.elapsed(), details),
            Ok(Err(e)) => CheckOutcome::fail(name, started.elapsed(), format!("{e:#}")),
            Err(e) => CheckOutcome::fail(name, started.elapsed(), format!("check panicked: {e}")),
        };

        let status = if outcome.success { "PASS" } else { "FAIL" };
        info!("{name}: {status} ({:.2}s)", outcome.duration);
        if let Some(err) = &outcome.error_message {
            error!("  Error: {err}");
        }

        results.push(outcome);
    }
    results
}
