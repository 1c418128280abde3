//! Interfaces the mod-loader host provides to a plugin

use std::collections::HashMap;

use crate::error::MemoryError;
use crate::memory::{EmulatedMemory, RdramImage};
use crate::player::Movement;

/// Name of the global slot holding the global context pointer
pub const GLOBAL_CONTEXT_POINTER: &str = "global_context_pointer";

/// Process-wide named integer slots populated by the host before post-init
pub trait GlobalSlots {
    fn slot(&self, name: &str) -> Option<u32>;
}

impl GlobalSlots for HashMap<String, u32> {
    fn slot(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

/// Coarse state of the player character, derived by the game core
pub trait PlayerState {
    fn movement(&self) -> Movement;
}

/// Everything a tick needs from the host
pub trait Host: EmulatedMemory + PlayerState {}

impl<T: EmulatedMemory + PlayerState + ?Sized> Host for T {}

/// Plugin lifecycle driven by the host.
///
/// The host calls `preinit`, `init` and `postinit` once each, in that order,
/// then `on_tick` once per emulated frame.
pub trait Plugin {
    fn name(&self) -> &'static str;

    fn preinit(&mut self) {}

    fn init(&mut self) {}

    fn postinit(&mut self, globals: &dyn GlobalSlots);

    fn on_tick(&mut self, host: &mut dyn Host);

    /// One-shot notification that the core finished injecting into the game
    fn on_inject_finished(&mut self) {}
}

/// Host backed by an in-memory RDRAM image, with the movement mode set by hand
#[derive(Debug, Clone, Default)]
pub struct SimulatedHost {
    pub ram: RdramImage,
    pub movement: Movement,
}

impl SimulatedHost {
    pub fn new(ram: RdramImage) -> Self {
        Self {
            ram,
            movement: Movement::default(),
        }
    }
}

impl EmulatedMemory for SimulatedHost {
    fn read_u16(&self, address: u32) -> Result<u16, MemoryError> {
        self.ram.read_u16(address)
    }

    fn read_u32(&self, address: u32) -> Result<u32, MemoryError> {
        self.ram.read_u32(address)
    }

    fn write_u32(&mut self, address: u32, value: u32) -> Result<(), MemoryError> {
        self.ram.write_u32(address, value)
    }
}

impl PlayerState for SimulatedHost {
    fn movement(&self) -> Movement {
        self.movement
    }
}
