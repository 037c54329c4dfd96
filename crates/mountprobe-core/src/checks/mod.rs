//! The check battery: seven independent verification procedures run in a
//! fixed order against the mount root.
//!
//! Each check owns the cleanup of any filesystem state it creates, on
//! success and failure paths alike; the [`ScratchPath`] and [`RestoreFile`]
//! guards make that hold on every exit path, including faults.

mod bench;
mod code_mods;
mod connectivity;
mod dir_ops;
mod file_ops;
mod git_ops;
mod search;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::process::CommandRunner;

pub use bench::PerformanceBenchmark;
pub use code_mods::CodeModifications;
pub use connectivity::BasicConnectivity;
pub use dir_ops::DirectoryOperations;
pub use file_ops::FileOperations;
pub use git_ops::GitOperations;
pub use search::FileSearchOperations;

/// Shared read-only input for every check.
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Root of the mounted remote filesystem.
    pub mount: PathBuf,
    /// Runner for external collaborators (git, cargo, find, grep).
    pub process: CommandRunner,
}

/// One independent verification procedure.
///
/// `Ok(details)` is a pass; any error is an assertion mismatch or fault the
/// engine converts into a failing outcome. A check never aborts the battery
/// and never depends on state left by another check.
#[async_trait]
pub trait Check: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, cx: &CheckContext) -> anyhow::Result<Option<Value>>;
}

/// The fixed battery, in invocation order. The order is fixed for report
/// readability, not correctness.
pub fn battery() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(BasicConnectivity),
        Arc::new(FileOperations),
        Arc::new(DirectoryOperations),
        Arc::new(GitOperations),
        Arc::new(CodeModifications),
        Arc::new(FileSearchOperations),
        Arc::new(PerformanceBenchmark),
    ]
}

/// Removes a file or directory tree when dropped. Idempotent: a path that
/// was already cleaned up (or never created) is left alone.
pub(crate) struct ScratchPath(pub PathBuf);

impl Drop for ScratchPath {
    fn drop(&mut self) {
        let _ = if self.0.is_dir() {
            std::fs::remove_dir_all(&self.0)
        } else {
            std::fs::remove_file(&self.0)
        };
    }
}

/// Writes captured content back to a file when dropped. Used where the
/// restore is mandatory on every exit path, including faults after a
/// partial modification.
pub(crate) struct RestoreFile {
    pub path: PathBuf,
    pub original: String,
}

impl Drop for RestoreFile {
    fn drop(&mut self) {
        let _ = std::fs::write(&self.path, &self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_order_is_fixed() {
        let names: Vec<&str> = battery().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            [
                "basic_connectivity",
                "file_operations",
                "directory_operations",
                "git_operations",
                "code_modifications",
                "file_search_operations",
                "performance_benchmark",
            ]
        );
    }

    #[test]
    fn scratch_guard_removes_files_and_trees() {
        let dir = tempfile::tempdir().unwrap();

        let file = dir.path().join("scratch.txt");
        std::fs::write(&file, "x").unwrap();
        drop(ScratchPath(file.clone()));
        assert!(!file.exists());

        let tree = dir.path().join("tree");
        std::fs::create_dir_all(tree.join("nested")).unwrap();
        drop(ScratchPath(tree.clone()));
        assert!(!tree.exists());

        // Already gone: the guard must not panic.
        drop(ScratchPath(dir.path().join("never-created")));
    }

    #[test]
    fn restore_guard_writes_back_original_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.rs");
        std::fs::write(&file, "original").unwrap();

        {
            let _restore = RestoreFile {
                path: file.clone(),
                original: "original".to_string(),
            };
            std::fs::write(&file, "modified").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "original");
    }
}
