use crate::client::{ClientError, ClientResult};

use ppr_config::ClientConfig;
use ppr_core::{CreateProjectRequest, CreateProjectResult, ProtocolVariant, StatusInfo};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method};

/// HTTP client for the automation server's trigger API
pub struct Client {
    pub base_url: String,
    config: ClientConfig,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client from a validated configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base_url: config.server_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
            config,
        }
    }

    pub fn variant(&self) -> ProtocolVariant {
        self.config.variant
    }

    /// Request body as it will go on the wire for this client's variant.
    pub fn wire_request(&self, request: &CreateProjectRequest) -> CreateProjectRequest {
        request.for_variant(self.config.variant)
    }

    /// Build a request with a per-call timeout
    fn request(&self, method: Method, path: &str, timeout: Duration) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url).timeout(timeout)
    }

    /// Query the server's readiness snapshot.
    ///
    /// Short timeout: the status endpoint answers from memory, so a slow
    /// reply means the server is effectively down. Transport and decode
    /// failures both leave the caller unable to gate, and map to their
    /// respective error kinds.
    pub async fn check_status(&self) -> ClientResult<StatusInfo> {
        debug!("GET {}/status", self.base_url);

        let req = self.request(Method::GET, "/status", self.config.status_timeout());
        let response = req.send().await?;
        let body = response.text().await?;
        let info: StatusInfo = serde_json::from_str(&body)?;

        debug!("status: {} connected client(s)", info.connected_clients);
        Ok(info)
    }

    /// Submit a create-project command.
    ///
    /// The request is narrowed to the configured protocol variant before
    /// serialization; an empty request goes out as `{}`. This call does
    /// not re-check readiness - the gate and the action are separate
    /// round trips, so a plugin disconnecting in between surfaces as an
    /// application failure from the server, like any other.
    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> ClientResult<CreateProjectResult> {
        let body = self.wire_request(request);

        debug!("POST {}/create-project", self.base_url);

        let req = self
            .request(
                Method::POST,
                "/create-project",
                self.config.create_timeout(),
            )
            .json(&body);
        let response = req.send().await?;
        let text = response.text().await?;
        let result: CreateProjectResult = serde_json::from_str(&text)?;

        if !result.success {
            return Err(ClientError::application(result.error_message()));
        }

        Ok(result)
    }
}
