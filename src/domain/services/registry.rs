//! Fingerprint Registry
//!
//! Maps header checksums to the versions the extractor has configurations
//! for. The table is data, not logic: when extractor configs gain or lose a
//! version, `BUILTIN_FINGERPRINTS` is edited to match.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::domain::value_objects::{HeaderChecksum, VersionDescriptor};
use crate::error::{RomexError, RomexResult};

/// Known CRC1 values: (checksum, version name, secondary title).
const BUILTIN_FINGERPRINTS: &[(u32, &str, bool)] = &[
    // Ocarina of Time, N64 cartridges
    (0xEC70_11B7, "OOT_NTSC_1.0", false),
    (0xD43D_A81F, "OOT_NTSC_1.1", false),
    (0x693B_A2AE, "OOT_NTSC_1.2", false),
    (0xB044_B569, "OOT_PAL_1.0", false),
    (0xB205_5FBD, "OOT_PAL_1.1", false),
    // Ocarina of Time, GameCube discs
    (0xF611_F4BA, "OOT_GC_JP", false),
    (0xF7F5_2DB8, "OOT_GC_JP_CE", false),
    (0xF43B_45BA, "OOT_GC_JP_MQ", false),
    (0xF3DD_35BA, "OOT_GC_US", false),
    (0xF034_001A, "OOT_GC_US_MQ", false),
    (0x0946_5AC3, "OOT_GC_EU", false),
    (0x1D41_36F3, "OOT_GC_EU_MQ", false),
    // Debug builds of the European disc
    (0x871E_1C92, "OOT_GC_EU_DBG_1", false),
    (0x8712_1EFE, "OOT_GC_EU_DBG_2", false),
    (0x917D_18F6, "OOT_GC_EU_MQ_DBG", false),
    // Majora's Mask
    (0x5354_631C, "MM_US_1.0", true),
    (0xB443_EB08, "MM_GC_US", true),
    (0xE979_55C6, "MM_PAL_1.0", true),
    (0xEC41_7312, "MM_JP_1.0", true),
    (0x69AE_0438, "MM_JP_1.1", true),
];

/// One row of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintEntry {
    pub checksum: HeaderChecksum,
    pub descriptor: VersionDescriptor,
}

impl FingerprintEntry {
    pub fn new(checksum: HeaderChecksum, descriptor: VersionDescriptor) -> Self {
        Self {
            checksum,
            descriptor,
        }
    }
}

/// Read-only checksum -> version table.
#[derive(Debug, Clone, Default)]
pub struct FingerprintRegistry {
    entries: HashMap<HeaderChecksum, VersionDescriptor>,
}

/// Duplicate found while building the built-in table, kept cloneable so the
/// cached result can be handed out more than once.
#[derive(Debug, Clone)]
struct Duplicate {
    checksum: String,
    first: String,
    second: String,
}

impl From<Duplicate> for RomexError {
    fn from(d: Duplicate) -> Self {
        RomexError::DuplicateFingerprint {
            checksum: d.checksum,
            first: d.first,
            second: d.second,
        }
    }
}

static BUILTIN: OnceLock<Result<FingerprintRegistry, Duplicate>> = OnceLock::new();

impl FingerprintRegistry {
    /// Build a registry, rejecting any checksum that appears twice.
    pub fn from_entries(entries: impl IntoIterator<Item = FingerprintEntry>) -> RomexResult<Self> {
        Self::build(entries).map_err(RomexError::from)
    }

    fn build(entries: impl IntoIterator<Item = FingerprintEntry>) -> Result<Self, Duplicate> {
        let mut map: HashMap<HeaderChecksum, VersionDescriptor> = HashMap::new();
        for entry in entries {
            if let Some(existing) = map.get(&entry.checksum) {
                return Err(Duplicate {
                    checksum: entry.checksum.to_string(),
                    first: existing.name().to_string(),
                    second: entry.descriptor.name().to_string(),
                });
            }
            map.insert(entry.checksum, entry.descriptor);
        }
        Ok(Self { entries: map })
    }

    /// The process-wide registry of supported versions, built on first use.
    pub fn builtin() -> RomexResult<&'static FingerprintRegistry> {
        BUILTIN
            .get_or_init(|| Self::build(builtin_entries()))
            .as_ref()
            .map_err(|d| d.clone().into())
    }

    pub fn lookup(&self, checksum: &HeaderChecksum) -> Option<&VersionDescriptor> {
        self.entries.get(checksum)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by version name.
    pub fn entries(&self) -> Vec<(HeaderChecksum, &VersionDescriptor)> {
        let mut rows: Vec<_> = self.entries.iter().map(|(k, v)| (*k, v)).collect();
        rows.sort_by(|a, b| a.1.name().cmp(b.1.name()));
        rows
    }
}

fn builtin_entries() -> impl Iterator<Item = FingerprintEntry> {
    BUILTIN_FINGERPRINTS
        .iter()
        .map(|&(crc, name, secondary)| {
            FingerprintEntry::new(
                HeaderChecksum::new(crc),
                VersionDescriptor::new(name, secondary),
            )
        })
}
