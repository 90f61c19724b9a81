//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod byte_order;
mod checksum;
mod hash;
mod mode;
mod version;

pub use byte_order::RomByteOrder;
pub use checksum::{HeaderChecksum, ParseChecksumError};
pub use hash::ContentHash;
pub use mode::ExtractMode;
pub use version::{TitleFamily, VersionDescriptor};
