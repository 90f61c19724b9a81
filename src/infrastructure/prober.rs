//! Image Prober
//!
//! Reads the header of a candidate file and matches it against the
//! fingerprint registry. Only the first `HEADER_LEN` bytes are needed to
//! identify a ROM; the optional content hash streams the rest.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::domain::entities::IdentifiedImage;
use crate::domain::services::FingerprintRegistry;
use crate::domain::value_objects::{ContentHash, HeaderChecksum, RomByteOrder};
use crate::error::{RomexError, RomexResult};

/// Bytes of the N64 header read for identification.
pub const HEADER_LEN: usize = 0x40;

/// Smallest plausible ROM: header, boot code and the 1 MiB checksummed region.
pub const MIN_ROM_SIZE: u64 = 0x10_1000;

/// Identifies ROM files against a registry.
#[derive(Debug, Clone, Copy)]
pub struct ImageProber<'a> {
    registry: &'a FingerprintRegistry,
    min_size: u64,
    content_hash: bool,
}

impl<'a> ImageProber<'a> {
    pub fn new(registry: &'a FingerprintRegistry) -> Self {
        Self {
            registry,
            min_size: MIN_ROM_SIZE,
            content_hash: false,
        }
    }

    /// Also compute the SHA-256 of the whole file for diagnostics.
    pub fn with_content_hash(mut self, enabled: bool) -> Self {
        self.content_hash = enabled;
        self
    }

    pub fn with_min_size(mut self, min_size: u64) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn registry(&self) -> &'a FingerprintRegistry {
        self.registry
    }

    /// Identify the ROM at `path`.
    pub fn probe(&self, path: &Path) -> RomexResult<IdentifiedImage> {
        let unreadable = |source: io::Error| RomexError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        };
        let unrecognized = |reason: String| RomexError::UnrecognizedImage {
            path: path.to_path_buf(),
            reason,
        };

        let mut file = File::open(path).map_err(unreadable)?;
        let size = file.metadata().map_err(unreadable)?.len();

        let mut header = [0u8; HEADER_LEN];
        match file.read_exact(&mut header) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(unrecognized(format!(
                    "file is {} bytes, too small to hold a ROM header",
                    size
                )));
            }
            Err(e) => return Err(unreadable(e)),
        }

        let first_word = [header[0], header[1], header[2], header[3]];
        let byte_order = RomByteOrder::detect(first_word).ok_or_else(|| {
            unrecognized(format!(
                "not an N64 ROM image (first word {:02x}{:02x}{:02x}{:02x})",
                first_word[0], first_word[1], first_word[2], first_word[3]
            ))
        })?;

        if size < self.min_size {
            return Err(unrecognized(format!(
                "image is {} bytes, smaller than the {} byte minimum",
                size, self.min_size
            )));
        }

        byte_order.normalize(&mut header);
        let checksum = HeaderChecksum::from_header(&header)
            .ok_or_else(|| unrecognized("truncated ROM header".to_string()))?;

        let descriptor = self
            .registry
            .lookup(&checksum)
            .ok_or_else(|| unrecognized(format!("unknown header checksum {}", checksum)))?
            .clone();

        let mut image = IdentifiedImage::new(path, descriptor, checksum)
            .with_byte_order(byte_order)
            .with_size(size);

        if self.content_hash {
            file.seek(SeekFrom::Start(0)).map_err(unreadable)?;
            let hash = ContentHash::from_reader(BufReader::new(file)).map_err(unreadable)?;
            image = image.with_content_hash(hash);
        }

        Ok(image)
    }
}
