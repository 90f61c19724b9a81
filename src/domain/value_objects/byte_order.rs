//! ROM byte order
//!
//! N64 dumps circulate in three layouts. Everything downstream of the prober
//! works on the big-endian (`.z64`) view.

use std::fmt;

/// Storage layout of an N64 ROM dump, detected from its first word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomByteOrder {
    /// Native order (`.z64`)
    BigEndian,
    /// 16-bit halves swapped (`.v64`)
    ByteSwapped,
    /// 32-bit words reversed (`.n64`)
    LittleEndian,
}

impl RomByteOrder {
    /// First word of every N64 ROM in native order.
    pub const MAGIC: [u8; 4] = [0x80, 0x37, 0x12, 0x40];

    /// Detect the layout from the first four bytes of a dump.
    pub fn detect(first_word: [u8; 4]) -> Option<Self> {
        match first_word {
            [0x80, 0x37, 0x12, 0x40] => Some(Self::BigEndian),
            [0x37, 0x80, 0x40, 0x12] => Some(Self::ByteSwapped),
            [0x40, 0x12, 0x37, 0x80] => Some(Self::LittleEndian),
            _ => None,
        }
    }

    /// Rewrite `buf` in place into big-endian order.
    ///
    /// Any trailing bytes that do not fill a whole unit are left untouched.
    pub fn normalize(self, buf: &mut [u8]) {
        match self {
            Self::BigEndian => {}
            Self::ByteSwapped => {
                for pair in buf.chunks_exact_mut(2) {
                    pair.swap(0, 1);
                }
            }
            Self::LittleEndian => {
                for word in buf.chunks_exact_mut(4) {
                    word.reverse();
                }
            }
        }
    }

    /// Conventional file extension for this layout.
    pub fn extension(self) -> &'static str {
        match self {
            Self::BigEndian => "z64",
            Self::ByteSwapped => "v64",
            Self::LittleEndian => "n64",
        }
    }
}

impl fmt::Display for RomByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BigEndian => "big-endian",
            Self::ByteSwapped => "byte-swapped",
            Self::LittleEndian => "little-endian",
        };
        write!(f, "{} (.{})", label, self.extension())
    }
}
