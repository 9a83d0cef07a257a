use std::path::Path;

use colored::Colorize;
use tally_crypto::HashLinker;
use tally_server::{parse_bind_addr, ServerConfig, TallyServer, ADDR_ENV};
use tally_types::ParticipantId;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Config(args) => cmd_config(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn resolve_config(path: Option<&Path>, bind: Option<&str>) -> anyhow::Result<ServerConfig> {
    let addr = std::env::var(ADDR_ENV).ok();
    layer_config(path, addr.as_deref(), bind)
}

/// Defaults, then the config file, then `ADDR`, then `--bind`.
fn layer_config(path: Option<&Path>, addr: Option<&str>, bind: Option<&str>) -> anyhow::Result<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    config.apply_addr(addr)?;
    if let Some(bind) = bind {
        config.bind_addr = parse_bind_addr(bind)?;
    }
    config.genesis.validate()?;
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), args.bind.as_deref())?;
    let server = TallyServer::new(config)?;
    println!(
        "{} Tally ledger on {} (issuer: {}, supply: {})",
        "✓".green().bold(),
        server.config().bind_addr.to_string().bold(),
        server.config().genesis.issuer_name.yellow(),
        server.config().genesis.initial_supply,
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    tracing::info!("server stopped");
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), args.bind.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    println!("{}", fingerprint_of(&args).cyan());
    Ok(())
}

/// Hash the fields exactly as typed so the result matches stored fingerprints.
fn fingerprint_of(args: &FingerprintArgs) -> String {
    if let Err(e) = ParticipantId::parse(&args.participant_id) {
        tracing::warn!(id = %args.participant_id, error = %e, "participant id is not a UUID");
    }
    HashLinker::fingerprint(args.sequence, &args.created_at, &args.participant_id, &args.previous)
}
