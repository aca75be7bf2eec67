//! The status-gated trigger workflow.

use crate::client::{Client, ClientError};
use crate::report;

use ppr_core::{CreateProjectRequest, CreateProjectResult};

use log::debug;

/// Final classification of one trigger invocation. The process exit
/// status derives from this: only `Created` maps to success.
#[derive(Debug)]
pub enum TriggerOutcome {
    /// Status gate passed and the server confirmed creation.
    Created(CreateProjectResult),
    /// Status call succeeded but no plugin is attached. Creation was not
    /// attempted.
    NotReady,
    /// Transport-level failure on either call.
    Unreachable,
    /// The server answered the creation call with a failure, or its
    /// response could not be understood.
    Failed,
}

impl TriggerOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Query readiness, then create. Strictly sequential: the status call
/// completes (or times out) before the creation call starts, and a failed
/// gate means the creation call is never issued.
pub async fn run_trigger(client: &Client, request: &CreateProjectRequest) -> TriggerOutcome {
    let info = match client.check_status().await {
        Ok(info) => info,
        Err(err) => {
            debug!("status check failed: {err}");
            report::cannot_connect();
            return TriggerOutcome::Unreachable;
        }
    };

    report::status_summary(&info, client.variant());

    if !info.has_connected_plugin() {
        report::not_ready();
        return TriggerOutcome::NotReady;
    }

    report::creating(&client.base_url, &client.wire_request(request));

    match client.create_project(request).await {
        Ok(result) => {
            report::success(&result, client.variant());
            TriggerOutcome::Created(result)
        }
        Err(ClientError::Application { message, .. }) => {
            report::failed(&message);
            TriggerOutcome::Failed
        }
        Err(err @ ClientError::Transport { .. }) => {
            debug!("creation call failed: {err}");
            report::cannot_connect();
            TriggerOutcome::Unreachable
        }
        Err(ClientError::Decode { message, .. }) => {
            report::unexpected(&message);
            TriggerOutcome::Failed
        }
    }
}
