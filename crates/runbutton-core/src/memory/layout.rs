//! Memory layout constants for Ocarina of Time (NTSC 1.0) RDRAM structures
//!
//! Addresses are KSEG0 virtual addresses as seen by the game. Offsets are
//! relative to the structure they belong to.

/// RDRAM geometry
pub mod rdram {
    /// 8 MiB with the expansion pak installed
    pub const SIZE: usize = 0x80_0000;

    /// Strips the KSEG0/KSEG1 segment bits from a virtual address
    pub const PHYSICAL_MASK: u32 = 0x1FFF_FFFF;

    /// Start of KSEG0
    pub const KSEG0_BASE: u32 = 0x8000_0000;
}

/// Offsets into the global context (`GlobalContext`)
pub mod context {
    /// Controller 1 current button word (`state.input[0].cur.button`)
    pub const INPUT_BUTTONS: u32 = 0x14;
}

/// Offsets into the player actor instance
pub mod player {
    /// Player actor instance address
    pub const DEFAULT_ACTOR: u32 = 0x801D_AA30;

    pub const POS_X: u32 = 0x24;
    pub const POS_Y: u32 = 0x28;
    pub const POS_Z: u32 = 0x2C;

    pub const VEL_X: u32 = 0x5C;
    pub const VEL_Y: u32 = 0x60;
    pub const VEL_Z: u32 = 0x64;

    /// Fine-grained animation / interaction flags (`stateFlags2`)
    pub const STATE_FLAGS: u32 = 0x670;

    /// One past the last byte of the actor the controller touches
    pub const FIELDS_END: u32 = STATE_FLAGS + 4;
}
