//! Error types for romex
//!
//! Library code returns [`RomexError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for romex operations
pub type RomexResult<T> = Result<T, RomexError>;

/// Main error type for romex operations
#[derive(Error, Debug)]
pub enum RomexError {
    /// A candidate image could not be read
    #[error("cannot read {path}: {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but does not match any known ROM version
    #[error("unrecognized ROM image {path}: {reason}")]
    UnrecognizedImage { path: PathBuf, reason: String },

    /// Discovery found nothing to act on
    #[error("no ROM images found in {dir}")]
    NoCandidatesFound { dir: PathBuf },

    /// Several ROMs matched and prompting is disabled
    #[error("{count} ROM images found but running non-interactively; pass a ROM path explicitly")]
    AmbiguousSelectionNonInteractive { count: usize },

    /// The user closed the prompt without choosing
    #[error("ROM selection aborted")]
    SelectionAborted,

    /// Mutually exclusive modes were requested together
    #[error("invalid mode combination: {0}")]
    InvalidModeCombination(String),

    /// A path required by the selected mode is missing or empty
    #[error("missing required {what} for {mode}")]
    MissingRequiredPath {
        what: &'static str,
        mode: &'static str,
    },

    /// The extractor binary does not exist at the resolved location
    #[error("extractor executable not found at {path}")]
    ExtractorExecutableNotFound { path: PathBuf },

    /// The extractor ran but reported failure
    #[error("extractor failed ({status}): {command}")]
    ExtractionFailed { command: String, status: String },

    /// Two fingerprint entries share the same digest
    #[error("duplicate fingerprint {checksum} for '{first}' and '{second}'")]
    DuplicateFingerprint {
        checksum: String,
        first: String,
        second: String,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RomexError {
    /// File the error is about, if any.
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            RomexError::UnreadableFile { path, .. }
            | RomexError::UnrecognizedImage { path, .. }
            | RomexError::ExtractorExecutableNotFound { path } => Some(path),
            RomexError::NoCandidatesFound { dir } => Some(dir),
            RomexError::Config { file, .. } => Some(file),
            _ => None,
        }
    }
}
