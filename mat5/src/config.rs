//! Writer configuration

/// Byte order of everything written to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Little endian, the byte order MATLAB writes on every current platform
    #[default]
    Little,
    /// Big endian
    Big,
}

impl Endianness {
    /// Byte order of the running platform
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    /// Whether buffers can be written without byte swapping
    pub fn is_native(self) -> bool {
        self == Self::native()
    }
}

/// Configuration for serializing arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriterConfig {
    /// Byte order of all written words and elements
    pub endianness: Endianness,
    /// Check sparse structure before writing. Off by default, callers are
    /// trusted to hand over well-formed CSC buffers.
    pub validate_sparse: bool,
}

impl WriterConfig {
    /// Create the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set byte order
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Enable or disable sparse structure validation
    pub fn with_validation(mut self, validate_sparse: bool) -> Self {
        self.validate_sparse = validate_sparse;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WriterConfig::default();
        assert_eq!(config.endianness, Endianness::Little);
        assert!(!config.validate_sparse);
    }

    #[test]
    fn test_builder() {
        let config = WriterConfig::new()
            .with_endianness(Endianness::Big)
            .with_validation(true);
        assert_eq!(config.endianness, Endianness::Big);
        assert!(config.validate_sparse);
    }

    #[test]
    fn test_native() {
        assert!(Endianness::native().is_native());
        #[cfg(target_endian = "little")]
        assert!(!Endianness::Big.is_native());
    }
}
