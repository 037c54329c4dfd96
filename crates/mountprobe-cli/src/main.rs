mod cli;
mod exit_codes;
mod logging;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use mountprobe_core::report::{console, json};
use mountprobe_core::{HarnessError, Runner};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Logging may not be initialized yet; stderr is the fallback.
            eprintln!("fatal: {e:?}");
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

async fn run() -> anyhow::Result<i32> {
    let config = cli::Cli::parse().into_config();

    std::fs::create_dir_all(&config.results_dir).with_context(|| {
        format!(
            "failed to create results directory {}",
            config.results_dir.display()
        )
    })?;
    logging::init(&config.log_path())?;

    info!("Starting end-to-end filesystem verification");

    let runner = Runner::new(config.clone());
    let report = match runner.run_battery().await {
        Ok(report) => report,
        Err(e @ HarnessError::MountTimeout) => {
            // Whole-run abort: no checks ran, no report is persisted.
            error!("Aborting run: {e}");
            return Ok(exit_codes::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    json::write_json(&report, &config.report_path())?;
    console::log_summary(&report);
    info!("Results saved to: {}", config.report_path().display());

    Ok(if report.all_passed() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    })
}
