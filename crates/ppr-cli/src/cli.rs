use ppr_core::ProtocolVariant;

use std::str::FromStr;

use clap::Parser;

#[derive(Parser)]
#[command(name = "trigger")]
#[command(about = "Create a Premiere Pro project through the local automation server")]
#[command(version)]
pub struct Cli {
    /// Name for the new project (server default when omitted)
    pub project_name: Option<String>,

    /// Name for the sequence created inside the project
    pub sequence_name: Option<String>,

    /// Sequence preset to apply (extended protocol only)
    pub preset_name: Option<String>,

    /// Automation server base URL (default http://localhost:3000)
    #[arg(long)]
    pub server: Option<String>,

    /// Protocol variant the server speaks
    #[arg(long, value_parser = ProtocolVariant::from_str, default_value = "extended")]
    pub protocol: ProtocolVariant,

    /// Log debug diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,
}
