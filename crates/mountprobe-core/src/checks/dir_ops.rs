use async_trait::async_trait;
use serde_json::{json, Value};
use walkdir::WalkDir;

use super::{Check, CheckContext, ScratchPath};

/// Builds a small nested tree with a file at each level, enumerates it
/// recursively, then removes the whole tree. The recursive delete is
/// attempted on the failure path too.
pub struct DirectoryOperations;

#[async_trait]
impl Check for DirectoryOperations {
    fn name(&self) -> &'static str {
        "directory_operations"
    }

    async fn run(&self, cx: &CheckContext) -> anyhow::Result<Option<Value>> {
        let root = cx.mount.join("test_directory");
        let _cleanup = ScratchPath(root.clone());

        let nested = root.join("nested").join("deep");
        tokio::fs::create_dir_all(&nested).await?;
        tokio::fs::write(root.join("file1.txt"), "File in root test directory").await?;
        tokio::fs::write(nested.join("file2.txt"), "File in nested directory").await?;

        let mut files_created = 0usize;
        for entry in WalkDir::new(&root).min_depth(1) {
            entry?;
            files_created += 1;
        }

        tokio::fs::remove_dir_all(&root).await?;

        Ok(Some(json!({ "files_created": files_created })))
    }
}
