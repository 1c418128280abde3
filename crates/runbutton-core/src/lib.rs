//! # runbutton-core
//!
//! Run button plugin for Ocarina of Time running under a mod-loader host.
//!
//! Holding the bound button while the player is in a running-friendly state
//! nudges the player forward by a fraction of their current velocity every
//! frame. Holding START together with another button rebinds run to it.
//!
//! This crate provides:
//! - The per-frame controller ([`RunButtonController`])
//! - Host-facing interfaces (plugin lifecycle, emulated memory, player state)
//! - Button and player state flag sets
//! - An in-memory RDRAM image for driving the controller without an emulator

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod input;
pub mod memory;
pub mod player;

pub use config::{RunButtonConfig, RunButtonConfigBuilder};
pub use controller::{RunButtonController, TickOutcome};
pub use error::{Error, MemoryError, Result};
pub use host::{GLOBAL_CONTEXT_POINTER, GlobalSlots, Host, PlayerState, Plugin, SimulatedHost};
pub use input::{Button, Buttons};
pub use memory::{EmulatedMemory, RdramImage};
pub use player::{Movement, StateFlags, StateGate, Vec3, boosted_position};
