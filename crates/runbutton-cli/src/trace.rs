//! Recorded frame traces and their replay through the controller.
//!
//! A trace is a JSON document holding the player's starting position and one
//! record per frame with the raw button word, the coarse movement mode, the
//! raw fine-grained state word and the velocity the game computed.
//!
//! ```json
//! {
//!   "position": [0.0, 0.0, 0.0],
//!   "frames": [
//!     { "buttons": 32, "movement": "STANDING", "velocity": [6.0, 0.0, 4.0], "repeat": 30 },
//!     { "buttons": 36864, "movement": "STANDING" }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use runbutton_core::memory::layout::{context, player};
use runbutton_core::{
    Button, EmulatedMemory, GLOBAL_CONTEXT_POINTER, Movement, Plugin, RdramImage, RunButtonConfig,
    RunButtonController, SimulatedHost, TickOutcome, Vec3,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Address of the global slot the replay host advertises
const SLOT_ADDRESS: u32 = 0x8011_D338;
/// Where the replay host places the global context
const CONTEXT_ADDRESS: u32 = 0x801C_84A0;

#[derive(Debug, Clone, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub position: [f32; 3],
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub buttons: u16,
    pub movement: Movement,
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub velocity: [f32; 3],
    /// Number of consecutive frames this record stands for
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

impl Trace {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace {}", path.display()))?;
        let trace = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse trace {}", path.display()))?;
        Ok(trace)
    }

    pub fn frame_count(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Rebound,
    Blocked,
    NotHeld,
    Boosted,
}

impl From<&TickOutcome> for OutcomeKind {
    fn from(outcome: &TickOutcome) -> Self {
        match outcome {
            TickOutcome::Rebound(_) => Self::Rebound,
            TickOutcome::StateBlocked { .. } => Self::Blocked,
            TickOutcome::NotHeld => Self::NotHeld,
            TickOutcome::Boosted { .. } => Self::Boosted,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub outcome: OutcomeKind,
    pub binding: Button,
    pub position: Vec3,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub frames: Vec<FrameReport>,
    pub final_binding: Button,
    pub final_position: Vec3,
}

impl ReplayReport {
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.frames.iter().filter(|f| f.outcome == kind).count()
    }
}

/// Drive a fresh controller through every frame of `trace`
pub fn replay(trace: &Trace, config: RunButtonConfig) -> Result<ReplayReport> {
    let actor = config.player_actor;
    let mut host = SimulatedHost::new(RdramImage::new());
    host.ram.write_u32(SLOT_ADDRESS, CONTEXT_ADDRESS)?;
    write_vec3(
        &mut host.ram,
        actor,
        [player::POS_X, player::POS_Y, player::POS_Z],
        trace.position,
    )?;

    let mut slots = HashMap::new();
    slots.insert(GLOBAL_CONTEXT_POINTER.to_string(), SLOT_ADDRESS);

    let mut controller = RunButtonController::new(config);
    controller.preinit();
    controller.init();
    controller.postinit(&slots);
    controller.on_inject_finished();

    let mut frames = Vec::new();
    let mut frame_no = 0u64;
    for record in &trace.frames {
        for _ in 0..record.repeat {
            host.movement = record.movement;
            host.ram
                .write_u16(CONTEXT_ADDRESS + context::INPUT_BUTTONS, record.buttons)?;
            host.ram
                .write_u32(actor.wrapping_add(player::STATE_FLAGS), record.flags)?;
            write_vec3(
                &mut host.ram,
                actor,
                [player::VEL_X, player::VEL_Y, player::VEL_Z],
                record.velocity,
            )?;

            let outcome = controller.tick(&mut host);
            let position = read_position(&host.ram, actor)?;
            debug!("Frame {}: {:?}", frame_no, outcome);

            frames.push(FrameReport {
                frame: frame_no,
                outcome: OutcomeKind::from(&outcome),
                binding: controller.binding(),
                position,
            });
            frame_no += 1;
        }
    }

    Ok(ReplayReport {
        frames,
        final_binding: controller.binding(),
        final_position: read_position(&host.ram, actor)?,
    })
}

fn write_vec3(ram: &mut RdramImage, base: u32, offsets: [u32; 3], value: [f32; 3]) -> Result<()> {
    for (offset, component) in offsets.into_iter().zip(value) {
        ram.write_f32(base.wrapping_add(offset), component)?;
    }
    Ok(())
}

fn read_position(ram: &RdramImage, base: u32) -> Result<Vec3> {
    Ok(Vec3 {
        x: ram.read_f32(base.wrapping_add(player::POS_X))?,
        y: ram.read_f32(base.wrapping_add(player::POS_Y))?,
        z: ram.read_f32(base.wrapping_add(player::POS_Z))?,
    })
}
