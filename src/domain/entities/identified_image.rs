//! Identified Image Entity
//!
//! A ROM file on disk paired with the registry entry its header matched.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, HeaderChecksum, RomByteOrder, VersionDescriptor};

/// A candidate file whose header checksum was found in the registry.
///
/// There is no partially identified state: the prober either returns one of
/// these or an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifiedImage {
    path: PathBuf,
    descriptor: VersionDescriptor,
    checksum: HeaderChecksum,
    byte_order: RomByteOrder,
    size: u64,
    content_hash: Option<ContentHash>,
}

impl IdentifiedImage {
    pub fn new(
        path: impl Into<PathBuf>,
        descriptor: VersionDescriptor,
        checksum: HeaderChecksum,
    ) -> Self {
        Self {
            path: path.into(),
            descriptor,
            checksum,
            byte_order: RomByteOrder::BigEndian,
            size: 0,
            content_hash: None,
        }
    }

    pub fn with_byte_order(mut self, byte_order: RomByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_content_hash(mut self, hash: ContentHash) -> Self {
        self.content_hash = Some(hash);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn descriptor(&self) -> &VersionDescriptor {
        &self.descriptor
    }

    pub fn checksum(&self) -> HeaderChecksum {
        self.checksum
    }

    pub fn byte_order(&self) -> RomByteOrder {
        self.byte_order
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn content_hash(&self) -> Option<&ContentHash> {
        self.content_hash.as_ref()
    }

    /// Ordering used whenever candidates are listed: version name, then path.
    pub fn display_order(a: &Self, b: &Self) -> std::cmp::Ordering {
        a.descriptor
            .name()
            .cmp(b.descriptor.name())
            .then_with(|| a.path.cmp(&b.path))
    }
}
