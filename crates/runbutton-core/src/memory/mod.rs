pub mod layout;
mod rdram;

pub use rdram::RdramImage;

use crate::error::MemoryError;

/// Access to the emulated console's RAM.
///
/// Values are big-endian as on the console. Implementations report failures
/// instead of panicking; callers decide whether a failure matters.
pub trait EmulatedMemory {
    fn read_u16(&self, address: u32) -> Result<u16, MemoryError>;

    fn read_u32(&self, address: u32) -> Result<u32, MemoryError>;

    fn write_u32(&mut self, address: u32, value: u32) -> Result<(), MemoryError>;

    fn read_f32(&self, address: u32) -> Result<f32, MemoryError> {
        self.read_u32(address).map(f32::from_bits)
    }

    fn write_f32(&mut self, address: u32, value: f32) -> Result<(), MemoryError> {
        self.write_u32(address, value.to_bits())
    }

    /// Read the 32-bit pointer stored at `pointer`, then the u16 at
    /// `*pointer + offset`.
    fn read_ptr_u16(&self, pointer: u32, offset: u32) -> Result<u16, MemoryError> {
        let base = self.read_u32(pointer)?;
        self.read_u16(base.wrapping_add(offset))
    }
}
