//! Content Hash Value Object
//!
//! SHA-256 digest of a whole ROM file. Diagnostic only: identification is
//! keyed on the header checksum, this is what verbose output shows so users
//! can compare dumps against published hashes.

use std::fmt;
use std::io::{self, Read};

use sha2::{Digest, Sha256};

/// Size of each read while hashing a file.
const CHUNK_SIZE: usize = 64 * 1024;

/// Content hash value object
///
/// Wraps a lowercase SHA-256 hex string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Hash an in-memory buffer
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, Sha256::digest(bytes)))
    }

    /// Hash everything `reader` yields, in fixed-size chunks.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buf[..n]);
        }
        Ok(Self(format!("{}{:x}", Self::PREFIX, hasher.finalize())))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
