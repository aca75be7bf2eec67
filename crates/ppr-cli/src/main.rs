//! trigger - Premiere Pro remote project creator
//!
//! Checks that the local automation server has a plugin attached, then
//! submits a create-project command and reports the result.
//!
//! # Examples
//!
//! ```bash
//! # Create a project with server-side defaults
//! trigger
//!
//! # Name the project and the sequence
//! trigger "Client Promo" "Main Edit"
//!
//! # Extended protocol: pick a sequence preset too
//! trigger "Client Promo" "Main Edit" "Vertical 4K"
//! ```

use ppr_cli::{Cli, Client, logger, report, run_trigger};

use ppr_config::ClientConfig;
use ppr_core::CreateProjectRequest;

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = logger::initialize(level) {
        eprintln!("Failed to initialize logger: {e}");
    }

    // Server URL: explicit flag > built-in default
    let server_url = match cli.server {
        Some(url) => url,
        None => ClientConfig::default().server_url,
    };

    let config = ClientConfig {
        server_url,
        variant: cli.protocol,
        ..Default::default()
    };

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    if cli.preset_name.is_some() && !cli.protocol.supports_presets() {
        warn!("preset argument ignored: the minimal protocol has no presetName field");
    }

    let request = CreateProjectRequest::new(cli.project_name, cli.sequence_name, cli.preset_name);
    let client = Client::new(config);

    report::banner();

    if run_trigger(&client, &request).await.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
