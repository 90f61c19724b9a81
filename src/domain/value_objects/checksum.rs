//! Header Checksum Value Object
//!
//! The identifying digest of a ROM: the first CRC word the N64 header stores
//! at offset `0x10`, read in big-endian order after normalization.

use std::fmt;
use std::str::FromStr;

/// CRC1 word from a normalized ROM header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeaderChecksum(u32);

impl HeaderChecksum {
    /// Byte offset of the checksum inside the header.
    pub const OFFSET: usize = 0x10;

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Read the checksum from a big-endian header buffer.
    ///
    /// Returns `None` when the buffer is too short to contain it.
    pub fn from_header(header: &[u8]) -> Option<Self> {
        let bytes = header.get(Self::OFFSET..Self::OFFSET + 4)?;
        let word: [u8; 4] = bytes.try_into().ok()?;
        Some(Self(u32::from_be_bytes(word)))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for HeaderChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Error returned when a checksum string is not 8 hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChecksumError(String);

impl fmt::Display for ParseChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid header checksum '{}': expected 8 hex digits", self.0)
    }
}

impl std::error::Error for ParseChecksumError {}

impl FromStr for HeaderChecksum {
    type Err = ParseChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if hex.len() != 8 {
            return Err(ParseChecksumError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| ParseChecksumError(s.to_string()))
    }
}
