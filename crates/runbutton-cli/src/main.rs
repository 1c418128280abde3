mod cli;
mod commands;
mod trace;

use anyhow::Result;
use clap::Parser;
use runbutton_core::RunButtonConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::commands::hex_utils::parse_hex_address;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("runbutton=info".parse()?)
                .add_directive("runbutton_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Replay {
            trace,
            actor,
            gate,
            json,
        } => {
            let mut config = load_config(&args.config)?;
            if let Some(actor) = actor {
                config.player_actor = parse_hex_address(&actor)?;
            }
            if let Some(gate) = gate {
                config.state_gate = gate;
            }
            config.validate()?;
            commands::replay::run(&trace, config, json)
        }
        Command::Buttons => commands::buttons::run(),
    }
}

fn load_config(path: &std::path::Path) -> Result<RunButtonConfig> {
    match RunButtonConfig::load(path) {
        Ok(c) => {
            info!("Loaded config from {:?}", path);
            Ok(c)
        }
        Err(e) if e.is_not_found() => {
            warn!("Config {:?} not found, using defaults", path);
            Ok(RunButtonConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}
