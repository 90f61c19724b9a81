//! Extraction mode

use std::fmt;

use crate::error::{RomexError, RomexResult};

/// What the extractor is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractMode {
    /// Source headers from a ROM (`-gsf 1`)
    Headers,
    /// A packaged asset archive from a ROM
    Archive,
    /// A custom archive built without any ROM
    CustomArchive,
}

impl ExtractMode {
    /// Resolve the mode from the two front-end switches.
    ///
    /// Header generation needs a ROM, so it cannot be combined with the
    /// ROM-less custom archive build.
    pub fn from_flags(gen_headers: bool, no_rom: bool) -> RomexResult<Self> {
        match (gen_headers, no_rom) {
            (true, true) => Err(RomexError::InvalidModeCombination(
                "header generation requires a ROM and cannot be combined with --norom"
                    .to_string(),
            )),
            (true, false) => Ok(Self::Headers),
            (false, true) => Ok(Self::CustomArchive),
            (false, false) => Ok(Self::Archive),
        }
    }

    /// Whether this mode reads a ROM image.
    pub fn needs_rom(self) -> bool {
        !matches!(self, Self::CustomArchive)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Headers => "header generation",
            Self::Archive => "archive generation",
            Self::CustomArchive => "custom archive generation",
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
