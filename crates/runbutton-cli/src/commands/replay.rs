//! Replay command implementation.

use std::path::Path;

use anyhow::Result;
use runbutton_core::RunButtonConfig;
use tracing::info;

use super::hex_utils::format_hex_address;
use crate::trace::{OutcomeKind, Trace, replay};

/// Run the replay command
pub fn run(trace_path: &Path, config: RunButtonConfig, json: bool) -> Result<()> {
    let trace = Trace::load(trace_path)?;
    info!(
        "Replaying {} frames from {}",
        trace.frame_count(),
        trace_path.display()
    );

    let initial_binding = config.default_button;
    let actor = config.player_actor;
    let gate = config.state_gate;
    let report = replay(&trace, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Replay ===");
    println!("Actor:   {}", format_hex_address(actor));
    println!("Gate:    {}", gate);
    println!("Binding: {}", initial_binding);
    println!();

    for frame in &report.frames {
        let p = frame.position;
        println!(
            "{:>6}  {:<9}  {:<7}  ({:.3}, {:.3}, {:.3})",
            frame.frame,
            outcome_label(frame.outcome),
            frame.binding.name(),
            p.x,
            p.y,
            p.z
        );
    }

    let p = report.final_position;
    println!();
    println!(
        "Boosted: {}  Blocked: {}  Not held: {}  Rebound: {}",
        report.count(OutcomeKind::Boosted),
        report.count(OutcomeKind::Blocked),
        report.count(OutcomeKind::NotHeld),
        report.count(OutcomeKind::Rebound)
    );
    println!("Final binding:  {}", report.final_binding);
    println!("Final position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);

    Ok(())
}

fn outcome_label(kind: OutcomeKind) -> &'static str {
    match kind {
        OutcomeKind::Rebound => "rebound",
        OutcomeKind::Blocked => "blocked",
        OutcomeKind::NotHeld => "not held",
        OutcomeKind::Boosted => "boosted",
    }
}
