pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::create_project_request::CreateProjectRequest;
pub use models::create_project_result::CreateProjectResult;
pub use models::protocol_variant::ProtocolVariant;
pub use models::status_info::StatusInfo;

/// Save path reported when the server omits one from its status payload.
pub const UNKNOWN_SAVE_PATH: &str = "N/A";
