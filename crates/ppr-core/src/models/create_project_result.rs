//! Server verdict for a create-project command.

use serde::{Deserialize, Serialize};

/// Outcome reported by the automation server. On success the server
/// echoes what it actually created; on failure only `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Sequence created inside the project. Extended protocol only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_name: Option<String>,
    /// Preset the server applied to the sequence. Extended protocol only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateProjectResult {
    /// Failure message, falling back when the server omits one.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}
