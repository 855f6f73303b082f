//! Error types for target and adapter operations

use thiserror::Error;

/// Errors raised by the target layer.
///
/// Every variant except [`Error::UnknownFamily`] is terminal: callers
/// propagate it unchanged and only the outermost entry point turns it
/// into an exit status. `UnknownFamily` is raised per configuration
/// entry and the registration pass continues past it.
#[derive(Error, Debug)]
pub enum Error {
    /// No adapter responded within the configured number of open attempts
    #[error("no target found")]
    AdapterNotFound,

    /// The adapter opened but the device identifier register read as zero
    #[error("target not responding")]
    DeviceNotResponding,

    /// The device identifier matched no variant table entry
    #[error("unknown device id {0:#010x}")]
    UnknownDevice(u32),

    /// A configuration entry named a family that cannot be registered
    #[error("{name}: unknown family {family:?}")]
    UnknownFamily {
        /// Variant name from the configuration entry
        name: String,
        /// The unrecognized family name
        family: String,
    },

    /// The USB port descriptor had a malformed vid:pid pair
    #[error("invalid port descriptor {0:?}")]
    InvalidPortDescriptor(String),

    /// The adapter lacks a capability the requested operation needs
    #[error("{0} not supported by the adapter")]
    UnsupportedOperation(&'static str),

    /// Read-back disagreed with the expected data after masking
    #[error("verify error at address {addr:08X}: expected {expected:08X}, read {actual:08X}")]
    VerifyMismatch {
        /// Absolute (untranslated) word address
        addr: u32,
        /// Expected word after the family word-mask was applied
        expected: u32,
        /// Word actually read back from the device
        actual: u32,
    },

    /// The variant table is at capacity and cannot take a new entry
    #[error("variant table full ({0} entries)")]
    RegistryFull(usize),

    /// Adapter transport or file I/O failure
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration or executive payload file
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for the one non-terminal kind, which registration passes
    /// log and skip instead of propagating.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::UnknownFamily { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let e = Error::VerifyMismatch {
            addr: 0x1d00_0010,
            expected: 0xCAFE_F00D,
            actual: 0xFFFF_FFFF,
        };
        assert_eq!(
            e.to_string(),
            "verify error at address 1D000010: expected CAFEF00D, read FFFFFFFF"
        );

        let e = Error::UnknownDevice(0x1234_5678);
        assert_eq!(e.to_string(), "unknown device id 0x12345678");
    }

    #[test]
    fn only_unknown_family_is_recoverable() {
        assert!(Error::UnknownFamily {
            name: "X".into(),
            family: "MX9".into()
        }
        .is_recoverable());
        assert!(!Error::AdapterNotFound.is_recoverable());
        assert!(!Error::RegistryFull(1000).is_recoverable());
    }
}
