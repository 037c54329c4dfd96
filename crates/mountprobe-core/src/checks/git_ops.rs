use std::time::Duration;

use anyhow::bail;
use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Check, CheckContext};

const BRANCH: &str = "e2e-test-branch";

const GENERATED_SOURCE: &str = r#"// This file was added during E2E testing
use std::collections::HashMap;

pub struct TestStruct {
    pub data: HashMap<String, String>,
}

impl TestStruct {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}
"#;

/// Exercises the version-control workflow on the mounted working tree:
/// branch recreation, a new source file, staging, a commit, and a log read.
///
/// Deliberately leaves the repository on the new branch with the commit
/// applied; the working tree is an external fixture and VCS state is not
/// rolled back.
pub struct GitOperations;

#[async_trait]
impl Check for GitOperations {
    fn name(&self) -> &'static str {
        "git_operations"
    }

    async fn run(&self, cx: &CheckContext) -> anyhow::Result<Option<Value>> {
        let root = cx.mount.display().to_string();

        let status = cx
            .process
            .run_with_timeout(&["git", "-C", root.as_str(), "status"], Duration::from_secs(10))
            .await;
        if !status.success {
            bail!("not a git repository: {}", status.stderr.trim());
        }

        // Stale branch from a previous run; absence is fine.
        let _ = cx
            .process
            .run(&["git", "-C", root.as_str(), "branch", "-D", BRANCH])
            .await;

        let checkout = cx
            .process
            .run(&["git", "-C", root.as_str(), "checkout", "-b", BRANCH])
            .await;
        if !checkout.success {
            bail!("failed to create branch: {}", checkout.stderr.trim());
        }

        tokio::fs::write(cx.mount.join("src").join("test_changes.rs"), GENERATED_SOURCE).await?;

        let add = cx.process.run(&["git", "-C", root.as_str(), "add", "."]).await;
        if !add.success {
            bail!("failed to stage changes: {}", add.stderr.trim());
        }

        let commit = cx
            .process
            .run(&[
                "git",
                "-C",
                root.as_str(),
                "commit",
                "-m",
                "E2E test: Add test file with new struct",
            ])
            .await;
        if !commit.success {
            bail!("failed to commit: {}", commit.stderr.trim());
        }

        let log = cx
            .process
            .run(&["git", "-C", root.as_str(), "log", "--oneline", "-n", "3"])
            .await;

        Ok(Some(json!({ "commit_log": log.stdout.trim() })))
    }
}
