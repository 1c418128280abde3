use std::path::PathBuf;

use clap::{Parser, Subcommand};
use runbutton_core::StateGate;

#[derive(Parser)]
#[command(name = "runbutton")]
#[command(about = "Offline tools for the run button plugin")]
pub struct Args {
    #[arg(short, long, default_value = "runbutton.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a recorded frame trace through the controller
    Replay {
        /// Trace file (JSON)
        trace: PathBuf,

        /// Override the player actor address (hex)
        #[arg(long)]
        actor: Option<String>,

        /// Override the state gate (coarse or extended)
        #[arg(long)]
        gate: Option<StateGate>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List bindable buttons in rebind priority order
    Buttons,
}
