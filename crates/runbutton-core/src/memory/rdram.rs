//! In-memory RDRAM image
//!
//! Backs [`EmulatedMemory`] with a plain byte buffer. Used by tests and by the
//! replay tool to drive the controller without an emulator attached.

use super::EmulatedMemory;
use super::layout::rdram;
use crate::error::MemoryError;

#[derive(Clone)]
pub struct RdramImage {
    bytes: Vec<u8>,
}

impl RdramImage {
    /// Create a zeroed image of full RDRAM size
    pub fn new() -> Self {
        Self::with_size(rdram::SIZE)
    }

    /// Create a zeroed image of `size` bytes
    pub fn with_size(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    pub fn write_u16(&mut self, address: u32, value: u16) -> Result<(), MemoryError> {
        let range = self.range(address, 2)?;
        self.bytes[range].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Resolve a virtual address to a byte range inside the image
    fn range(&self, address: u32, size: usize) -> Result<std::ops::Range<usize>, MemoryError> {
        if !(address as usize).is_multiple_of(size) {
            return Err(MemoryError::Unaligned { address, size });
        }

        let start = (address & rdram::PHYSICAL_MASK) as usize;
        let end = start + size;
        if end > self.bytes.len() {
            return Err(MemoryError::OutOfRange { address, size });
        }

        Ok(start..end)
    }

    fn read_array<const N: usize>(&self, address: u32) -> Result<[u8; N], MemoryError> {
        let range = self.range(address, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[range]);
        Ok(out)
    }
}

impl Default for RdramImage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RdramImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RdramImage")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl EmulatedMemory for RdramImage {
    fn read_u16(&self, address: u32) -> Result<u16, MemoryError> {
        self.read_array(address).map(u16::from_be_bytes)
    }

    fn read_u32(&self, address: u32) -> Result<u32, MemoryError> {
        self.read_array(address).map(u32::from_be_bytes)
    }

    fn write_u32(&mut self, address: u32, value: u32) -> Result<(), MemoryError> {
        let range = self.range(address, 4)?;
        self.bytes[range].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut ram = RdramImage::with_size(0x100);
        ram.write_u32(0x8000_0010, 0x1234_5678).unwrap();

        assert_eq!(ram.read_u16(0x8000_0010).unwrap(), 0x1234);
        assert_eq!(ram.read_u16(0x8000_0012).unwrap(), 0x5678);
    }

    #[test]
    fn test_segment_bits_are_masked() {
        let mut ram = RdramImage::with_size(0x100);
        ram.write_u16(0xA000_0020, 0xBEEF).unwrap();

        assert_eq!(ram.read_u16(0x8000_0020).unwrap(), 0xBEEF);
        assert_eq!(ram.read_u16(0x0000_0020).unwrap(), 0xBEEF);
    }

    #[test]
    fn test_f32_round_trips_through_bits() {
        let mut ram = RdramImage::with_size(0x100);
        ram.write_f32(0x8000_0040, -12.5).unwrap();

        assert_eq!(ram.read_f32(0x8000_0040).unwrap(), -12.5);
        assert_eq!(ram.read_u32(0x8000_0040).unwrap(), (-12.5f32).to_bits());
    }

    #[test]
    fn test_out_of_range() {
        let ram = RdramImage::with_size(0x100);
        assert_eq!(
            ram.read_u32(0x8000_0100),
            Err(MemoryError::OutOfRange {
                address: 0x8000_0100,
                size: 4
            })
        );
    }

    #[test]
    fn test_unaligned() {
        let ram = RdramImage::with_size(0x100);
        assert_eq!(
            ram.read_u32(0x8000_0002),
            Err(MemoryError::Unaligned {
                address: 0x8000_0002,
                size: 4
            })
        );
    }

    #[test]
    fn test_read_ptr_u16_dereferences() {
        let mut ram = RdramImage::with_size(0x1000);
        ram.write_u32(0x8000_0100, 0x8000_0800).unwrap();
        ram.write_u16(0x8000_0814, 0x0020).unwrap();

        assert_eq!(ram.read_ptr_u16(0x8000_0100, 0x14).unwrap(), 0x0020);
    }

    #[test]
    fn test_read_ptr_u16_through_null_pointer() {
        let mut ram = RdramImage::with_size(0x1000);
        ram.write_u16(0x14, 0x8000).unwrap();

        // A zero pointer resolves against the bottom of RAM without failing
        assert_eq!(ram.read_ptr_u16(0x8000_0100, 0x14).unwrap(), 0x8000);
    }
}
