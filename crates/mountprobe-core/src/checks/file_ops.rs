use anyhow::{bail, Context};
use async_trait::async_trait;
use serde_json::Value;

use super::{Check, CheckContext, ScratchPath};

const CONTENT: &str = "Hello from mountprobe! This is a scratch file created by the e2e harness.";

/// Full CRUD round-trip on one scratch file: create, read back, overwrite,
/// read back, delete, verify gone. The scratch file is force-removed on
/// every exit path.
pub struct FileOperations;

#[async_trait]
impl Check for FileOperations {
    fn name(&self) -> &'static str {
        "file_operations"
    }

    async fn run(&self, cx: &CheckContext) -> anyhow::Result<Option<Value>> {
        let path = cx.mount.join("test_file.txt");
        let _cleanup = ScratchPath(path.clone());

        tokio::fs::write(&path, CONTENT)
            .await
            .context("failed to create scratch file")?;
        let read_back = tokio::fs::read_to_string(&path).await?;
        if read_back != CONTENT {
            bail!("file content mismatch after create");
        }

        let updated = format!("{CONTENT}\nUpdated content.");
        tokio::fs::write(&path, &updated).await?;
        let read_back = tokio::fs::read_to_string(&path).await?;
        if read_back != updated {
            bail!("file content mismatch after update");
        }

        tokio::fs::remove_file(&path).await?;
        if path.exists() {
            bail!("file still present after delete");
        }

        Ok(None)
    }
}
