use std::time::Duration;

use anyhow::{bail, Context};
use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Check, CheckContext, RestoreFile};

/// Insertion point for the new function definition.
const FN_MAIN_MARKER: &str = "fn main() {";
/// The new call goes immediately after this line of the seeded fixture.
const CALL_SITE_MARKER: &str = r#"println!("Initialized with {} items", data.len());"#;

const NEW_FUNCTION: &str = r#"
fn process_data(input: &str) -> String {
    format!("Processed: {}", input.to_uppercase())
}

"#;

const NEW_CALL: &str = r#"
    println!("{}", process_data("test data"));"#;

/// Simulates an automated code edit against the seeded `src/main.rs`: two
/// fixed textual insertions, an optional syntax check, and a mandatory
/// verbatim restore of the original content on every exit path.
pub struct CodeModifications;

#[async_trait]
impl Check for CodeModifications {
    fn name(&self) -> &'static str {
        "code_modifications"
    }

    async fn run(&self, cx: &CheckContext) -> anyhow::Result<Option<Value>> {
        let main_file = cx.mount.join("src").join("main.rs");
        if !main_file.exists() {
            bail!("main.rs file not found");
        }

        let original = tokio::fs::read_to_string(&main_file)
            .await
            .context("failed to read main.rs")?;
        let _restore = RestoreFile {
            path: main_file.clone(),
            original: original.clone(),
        };

        let modified = original
            .replace(FN_MAIN_MARKER, &format!("{NEW_FUNCTION}{FN_MAIN_MARKER}"))
            .replace(CALL_SITE_MARKER, &format!("{CALL_SITE_MARKER}{NEW_CALL}"));
        tokio::fs::write(&main_file, &modified).await?;

        let written = tokio::fs::read_to_string(&main_file).await?;
        if !written.contains("process_data") || !written.contains("test data") {
            bail!("code modifications were not saved properly");
        }

        // The syntax checker is the one collaborator whose absence is
        // tolerated: record it and move on.
        let probe = cx.process.run(&["cargo", "--version"]).await;
        let (cargo_available, syntax_check_passed, build_output) = if probe.success {
            let manifest = cx.mount.join("Cargo.toml").display().to_string();
            let check = cx
                .process
                .run_with_timeout(
                    &["cargo", "check", "--manifest-path", manifest.as_str()],
                    Duration::from_secs(120),
                )
                .await;
            let output = if check.stdout.is_empty() {
                check.stderr
            } else {
                check.stdout
            };
            (true, Some(check.success), truncate(&output, 500))
        } else {
            (
                false,
                None,
                "cargo not available in test environment".to_string(),
            )
        };

        Ok(Some(json!({
            "modifications_applied": true,
            "cargo_available": cargo_available,
            "syntax_check_passed": syntax_check_passed,
            "build_output": build_output,
        })))
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
