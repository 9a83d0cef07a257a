use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Tally — append-only participant ledger over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the ledger HTTP server
    Serve(ServeArgs),
    /// Print the resolved configuration as TOML
    Config(ConfigArgs),
    /// Compute a record fingerprint from its linkage fields
    Fingerprint(FingerprintArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Listen address (port or host:port); overrides config and ADDR
    #[arg(short, long)]
    pub bind: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Listen address (port or host:port); overrides config and ADDR
    #[arg(short, long)]
    pub bind: Option<String>,
}

#[derive(Args)]
pub struct FingerprintArgs {
    /// Record sequence number
    pub sequence: u64,
    /// Creation timestamp exactly as stored
    pub created_at: String,
    /// Participant id exactly as stored
    pub participant_id: String,
    /// Fingerprint of the preceding record
    #[arg(default_value = "")]
    pub previous: String,
}
