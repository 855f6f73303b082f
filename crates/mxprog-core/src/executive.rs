//! Programming-executive payloads
//!
//! Newer families refuse plain word programming and want a small
//! executive uploaded into target RAM first. The payload images are
//! not compiled in; they are loaded at runtime from little-endian
//! binary files and handed to the adapter as-is.

use std::path::Path;

use crate::error::{Error, Result};

/// One programming-executive payload, decoded to words.
#[derive(Debug, Clone)]
pub struct Executive {
    words: Vec<u32>,
}

impl Executive {
    /// Decodes a raw payload. The byte length must be word-aligned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(Error::Config(format!(
                "executive payload is {} bytes, not a whole number of words",
                bytes.len()
            )));
        }
        let words = bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self { words })
    }

    /// Reads and decodes a payload file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Payload contents in upload order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Payload length in words.
    pub fn nwords(&self) -> u32 {
        self.words.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_words() {
        let exec = Executive::from_bytes(&[0x78, 0x56, 0x34, 0x12, 0xFF, 0x00, 0x00, 0x00])
            .unwrap();
        assert_eq!(exec.words(), &[0x1234_5678, 0x0000_00FF]);
        assert_eq!(exec.nwords(), 2);
    }

    #[test]
    fn rejects_unaligned_payloads() {
        let err = Executive::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("3 bytes"));
    }

    #[test]
    fn empty_payload_is_valid() {
        let exec = Executive::from_bytes(&[]).unwrap();
        assert_eq!(exec.nwords(), 0);
    }
}
