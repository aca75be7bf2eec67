use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CREATE_TIMEOUT_SECS, DEFAULT_SERVER_URL,
    DEFAULT_STATUS_TIMEOUT_SECS, MAX_CREATE_TIMEOUT_SECS, MAX_STATUS_TIMEOUT_SECS,
};

use ppr_core::ProtocolVariant;

use std::time::Duration;

/// Everything the trigger client needs to talk to one automation server.
/// Passed in at client construction so tests can point it at a double.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the automation server. Trailing slash tolerated.
    pub server_url: String,
    /// Bound on the status query, seconds. The status endpoint answers
    /// from memory, so a slow reply means the server is effectively down.
    pub status_timeout_secs: u64,
    /// Bound on the create-project call, seconds. Creation inside the
    /// host application can be slow, so this is much larger.
    pub create_timeout_secs: u64,
    /// Wire-protocol variant the server speaks.
    pub variant: ProtocolVariant,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            status_timeout_secs: DEFAULT_STATUS_TIMEOUT_SECS,
            create_timeout_secs: DEFAULT_CREATE_TIMEOUT_SECS,
            variant: ProtocolVariant::default(),
        }
    }
}

impl ClientConfig {
    /// Default config pointed at another server.
    pub fn with_server_url<S: Into<String>>(server_url: S) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.server_url.trim().is_empty() {
            return Err(ConfigError::client("client.server_url must not be empty"));
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(ConfigError::client(format!(
                "client.server_url must start with http:// or https://, got {}",
                self.server_url
            )));
        }

        if self.status_timeout_secs == 0 || self.status_timeout_secs > MAX_STATUS_TIMEOUT_SECS {
            return Err(ConfigError::client(format!(
                "client.status_timeout_secs must be 1-{}, got {}",
                MAX_STATUS_TIMEOUT_SECS, self.status_timeout_secs
            )));
        }

        if self.create_timeout_secs == 0 || self.create_timeout_secs > MAX_CREATE_TIMEOUT_SECS {
            return Err(ConfigError::client(format!(
                "client.create_timeout_secs must be 1-{}, got {}",
                MAX_CREATE_TIMEOUT_SECS, self.create_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }

    pub fn create_timeout(&self) -> Duration {
        Duration::from_secs(self.create_timeout_secs)
    }
}
