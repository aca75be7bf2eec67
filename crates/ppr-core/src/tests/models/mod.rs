mod create_project_result;
mod protocol_variant;
mod status_info;
