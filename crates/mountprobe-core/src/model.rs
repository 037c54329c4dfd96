use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome of one check. Exactly one is produced per invoked check,
/// regardless of whether the check faulted internally.
///
/// Serialized into the report's `results` array; `error` and `details` are
/// always present as keys (null when absent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Matches the name of the check that produced it; unique within a run.
    pub name: String,
    pub success: bool,
    /// Wall-clock seconds, start to finish inclusive of cleanup.
    pub duration: f64,
    /// Present iff the check failed. Diagnostic text only, never control flow.
    #[serde(rename = "error")]
    pub error_message: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl CheckOutcome {
    pub fn pass(name: &str, duration: Duration, details: Option<serde_json::Value>) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            duration: duration.as_secs_f64(),
            error_message: None,
            details,
        }
    }

    pub fn fail(name: &str, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            duration: duration.as_secs_f64(),
            error_message: Some(error.into()),
            details: None,
        }
    }
}
