//! User-facing report on stdout.
//!
//! Every invocation path prints a human-readable multi-line summary here;
//! diagnostics go to the logger on stderr so piped output stays clean.

use ppr_core::{CreateProjectRequest, CreateProjectResult, ProtocolVariant, StatusInfo};

const BANNER_WIDTH: usize = 50;

pub fn banner() {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("{rule}");
    println!("Premiere Pro Remote Project Creator");
    println!("{rule}");
    println!();
}

/// Status block: connected plugin count, save path, and under the
/// extended protocol the server-side defaults.
pub fn status_summary(info: &StatusInfo, variant: ProtocolVariant) {
    println!("Server status:");
    println!("  Connected plugins: {}", info.connected_clients);
    println!("  Save path: {}", info.default_save_path);

    if variant.supports_presets() {
        println!(
            "  Default preset: {}",
            info.default_preset.as_deref().unwrap_or("N/A")
        );
        println!(
            "  Default sequence: {}",
            info.default_sequence.as_deref().unwrap_or("N/A")
        );
    }
}

pub fn not_ready() {
    println!();
    println!("No plugin connected - load the plugin in Premiere Pro and retry.");
}

/// Echo the endpoint and payload before the (possibly slow) creation call.
pub fn creating(base_url: &str, payload: &CreateProjectRequest) {
    println!();
    println!("Creating project...");
    println!("  Server: {base_url}/create-project");

    if !payload.is_empty()
        && let Ok(json) = serde_json::to_string(payload)
    {
        println!("  Data: {json}");
    }
}

/// Success summary showing every field the server returned for the
/// configured protocol variant.
pub fn success(result: &CreateProjectResult, variant: ProtocolVariant) {
    println!();
    println!("SUCCESS!");

    if let Some(ref name) = result.project_name {
        println!("  Project: {name}");
    }
    if let Some(ref path) = result.project_path {
        println!("  Path: {path}");
    }

    if variant.supports_presets() {
        if let Some(ref sequence) = result.sequence_name {
            println!("  Sequence: {sequence}");
        }
        if let Some(ref preset) = result.preset_used {
            println!("  Preset: {preset}");
        }
    }
}

/// The server answered the creation call and said no.
pub fn failed(message: &str) {
    println!();
    println!("FAILED: {message}");
}

/// Response arrived but could not be understood.
pub fn unexpected(message: &str) {
    println!();
    println!("Error: {message}");
}

/// Transport failure on either call, with operator remediation steps.
pub fn cannot_connect() {
    println!();
    println!("Cannot connect to server - is it running?");
    println!("  1. Start the automation server (npm start in its directory)");
    println!("  2. Load the plugin in Premiere Pro");
    println!("  3. Or point elsewhere: trigger --server <url>");
}
