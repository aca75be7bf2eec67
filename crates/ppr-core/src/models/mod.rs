pub mod create_project_request;
pub mod create_project_result;
pub mod protocol_variant;
pub mod status_info;
