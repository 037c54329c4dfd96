use std::path::Path;

use anyhow::bail;
use async_trait::async_trait;
use serde_json::{json, Map, Value};

use super::{Check, CheckContext};

/// Drives the external discovery collaborators: a recursive file find and a
/// recursive text search, plus byte sizes for a sample of the hits.
pub struct FileSearchOperations;

#[async_trait]
impl Check for FileSearchOperations {
    fn name(&self) -> &'static str {
        "file_search_operations"
    }

    async fn run(&self, cx: &CheckContext) -> anyhow::Result<Option<Value>> {
        let root = cx.mount.display().to_string();

        let find = cx
            .process
            .run(&["find", root.as_str(), "-name", "*.rs", "-type", "f"])
            .await;
        if !find.success {
            bail!("find command failed: {}", find.stderr.trim());
        }
        let rust_files: Vec<&str> = find.stdout.lines().filter(|l| !l.is_empty()).collect();

        let src = cx.mount.join("src").display().to_string();
        let grep = cx
            .process
            .run(&["grep", "-r", "use ", src.as_str(), "--include=*.rs"])
            .await;
        // An erroring search and an empty result both count as zero matches;
        // the invocation status is recorded alongside so report readers can
        // tell the cases apart.
        let use_statements = if grep.stdout.is_empty() {
            0
        } else {
            grep.stdout.lines().count()
        };

        let mut file_sizes = Map::new();
        for file in rust_files.iter().take(5) {
            let path = Path::new(file);
            if let (Ok(meta), Some(name)) = (tokio::fs::metadata(path).await, path.file_name()) {
                file_sizes.insert(name.to_string_lossy().into_owned(), json!(meta.len()));
            }
        }

        Ok(Some(json!({
            "rust_files_found": rust_files.len(),
            "use_statements_found": use_statements,
            "search_succeeded": grep.success,
            "file_sizes": file_sizes,
        })))
    }
}
