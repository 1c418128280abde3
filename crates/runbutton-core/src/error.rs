use thiserror::Error;

/// Failure reported by an emulated memory implementation.
///
/// The tick path never surfaces these to the host; see
/// [`RunButtonController::tick`](crate::RunButtonController::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("RDRAM access out of range at {address:#010x} (size: {size})")]
    OutOfRange { address: u32, size: usize },

    #[error("Unaligned RDRAM access at {address:#010x} (size: {size})")]
    Unaligned { address: u32, size: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Memory access failed: {0}")]
    Memory(#[from] MemoryError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_memory_error_display() {
        let err = MemoryError::OutOfRange {
            address: 0x8090_0000,
            size: 4,
        };
        assert_eq!(
            err.to_string(),
            "RDRAM access out of range at 0x80900000 (size: 4)"
        );

        let wrapped: Error = err.into();
        assert!(matches!(wrapped, Error::Memory(_)));
        assert!(!wrapped.is_not_found());
    }
}
