use anyhow::bail;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use super::{Check, CheckContext};

/// Asserts the mount root exists and is listable; counts top-level entries.
pub struct BasicConnectivity;

#[async_trait]
impl Check for BasicConnectivity {
    fn name(&self) -> &'static str {
        "basic_connectivity"
    }

    async fn run(&self, cx: &CheckContext) -> anyhow::Result<Option<Value>> {
        if !cx.mount.exists() {
            bail!("Mount point does not exist");
        }

        let mut entries = tokio::fs::read_dir(&cx.mount).await?;
        let mut files_found = 0usize;
        while entries.next_entry().await?.is_some() {
            files_found += 1;
        }
        info!("Found {files_found} items in remote filesystem");

        Ok(Some(json!({ "files_found": files_found })))
    }
}
