use std::time::Instant;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Check, CheckContext, ScratchPath};

const FILE_COUNT: usize = 10;

/// Measures write, read, and listing latency with ten ~2KB scratch files.
/// Measurement only: the check fails on a fault, never on slowness.
pub struct PerformanceBenchmark;

#[async_trait]
impl Check for PerformanceBenchmark {
    fn name(&self) -> &'static str {
        "performance_benchmark"
    }

    async fn run(&self, cx: &CheckContext) -> anyhow::Result<Option<Value>> {
        let dir = cx.mount.join("performance_test");
        let _cleanup = ScratchPath(dir.clone());
        tokio::fs::create_dir_all(&dir).await?;

        let mut write_times = Vec::with_capacity(FILE_COUNT);
        for i in 0..FILE_COUNT {
            let content = format!("Performance test file {i} ").repeat(100);
            let started = Instant::now();
            tokio::fs::write(dir.join(format!("perf_test_{i}.txt")), content).await?;
            write_times.push(started.elapsed().as_secs_f64());
        }

        let mut read_times = Vec::with_capacity(FILE_COUNT);
        for i in 0..FILE_COUNT {
            let started = Instant::now();
            tokio::fs::read_to_string(dir.join(format!("perf_test_{i}.txt"))).await?;
            read_times.push(started.elapsed().as_secs_f64());
        }

        let list_started = Instant::now();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        let mut files_listed = 0usize;
        while entries.next_entry().await?.is_some() {
            files_listed += 1;
        }
        let list_time = list_started.elapsed().as_secs_f64();

        tokio::fs::remove_dir_all(&dir).await?;

        let avg = |times: &[f64]| times.iter().sum::<f64>() / times.len() as f64;

        Ok(Some(json!({
            "avg_write_time_ms": avg(&write_times) * 1000.0,
            "avg_read_time_ms": avg(&read_times) * 1000.0,
            "directory_list_time_ms": list_time * 1000.0,
            "files_tested": files_listed,
        })))
    }
}
