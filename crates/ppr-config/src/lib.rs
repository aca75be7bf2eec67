mod client_config;
mod error;


pub use client_config::ClientConfig;
pub use error::{ConfigError, ConfigErrorResult};

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CREATE_TIMEOUT_SECS: u64 = 60;
const MAX_STATUS_TIMEOUT_SECS: u64 = 30;
const MAX_CREATE_TIMEOUT_SECS: u64 = 300;
