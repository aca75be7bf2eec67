//! Body of the create-project command.

use crate::ProtocolVariant;

use serde::{Deserialize, Serialize};

/// Parameters for a project-creation command. Every field is optional;
/// an empty request serializes to `{}` and tells the server to use its
/// configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_name: Option<String>,
    /// Sequence preset to apply. Extended protocol only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_name: Option<String>,
}

impl CreateProjectRequest {
    pub fn new(
        project_name: Option<String>,
        sequence_name: Option<String>,
        preset_name: Option<String>,
    ) -> Self {
        Self {
            project_name,
            sequence_name,
            preset_name,
        }
    }

    /// True when no field is set and the body will serialize to `{}`.
    pub fn is_empty(&self) -> bool {
        self.project_name.is_none() && self.sequence_name.is_none() && self.preset_name.is_none()
    }

    /// Narrow the request to the fields the given variant understands.
    /// The minimal protocol has no `presetName` field, so it is dropped.
    pub fn for_variant(&self, variant: ProtocolVariant) -> Self {
        let mut narrowed = self.clone();
        if !variant.supports_presets() {
            narrowed.preset_name = None;
        }
        narrowed
    }
}
