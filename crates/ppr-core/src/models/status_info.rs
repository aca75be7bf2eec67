//! Readiness snapshot from the automation server.

use crate::UNKNOWN_SAVE_PATH;

use serde::{Deserialize, Serialize};

/// Response of the status endpoint. Missing fields decode to their
/// documented defaults (0 connected clients, "N/A" save path) instead of
/// failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusInfo {
    /// Number of plugin instances attached to the server.
    pub connected_clients: u32,
    pub default_save_path: String,
    /// Extended protocol only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_preset: Option<String>,
    /// Extended protocol only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sequence: Option<String>,
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            connected_clients: 0,
            default_save_path: String::from(UNKNOWN_SAVE_PATH),
            default_preset: None,
            default_sequence: None,
        }
    }
}

impl StatusInfo {
    /// Readiness gate: a creation command needs at least one attached
    /// plugin to execute it.
    pub fn has_connected_plugin(&self) -> bool {
        self.connected_clients > 0
    }
}
