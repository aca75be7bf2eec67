use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Wire-protocol variant spoken by the automation server.
///
/// The extended variant is a strict superset of the minimal one: it adds
/// `presetName` to creation requests and the default preset/sequence pair
/// to status responses. One client handles both; requests are narrowed
/// with [`crate::CreateProjectRequest::for_variant`] before they go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolVariant {
    /// `projectName`/`sequenceName` only
    Minimal,
    /// Adds `presetName` plus the default preset/sequence status fields
    #[default]
    Extended,
}

impl ProtocolVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Extended => "extended",
        }
    }

    /// Whether this variant carries preset information at all.
    pub fn supports_presets(&self) -> bool {
        matches!(self, Self::Extended)
    }
}

impl FromStr for ProtocolVariant {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "minimal" => Ok(Self::Minimal),
            "extended" => Ok(Self::Extended),
            _ => Err(CoreError::InvalidProtocolVariant {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProtocolVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
