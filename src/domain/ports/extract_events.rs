//! Extract Event Port
//!
//! Observable interface for the extraction pipeline. Sinks render events for
//! humans or as an NDJSON stream.

use std::path::PathBuf;

use crate::domain::value_objects::ExtractMode;

/// Event emitted while identifying ROMs and running the extractor
#[derive(Debug, Clone)]
pub enum ExtractEvent {
    /// Directory scan started
    DiscoveryStarted { dir: PathBuf },

    /// A scanned file was skipped because it did not identify
    CandidateRejected { path: PathBuf, reason: String },

    /// A file matched a registry entry
    ImageIdentified {
        path: PathBuf,
        version: String,
        checksum: String,
        byte_order: String,
        content_hash: Option<String>,
    },

    /// Selection finished
    Selected { selected: usize, candidates: usize },

    /// A plan was built and is about to run (or be printed, on dry runs)
    PlanReady {
        index: usize,
        mode: ExtractMode,
        rom: Option<PathBuf>,
        command: String,
    },

    /// The extractor finished successfully
    ExtractionSucceeded { index: usize, rom: Option<PathBuf> },

    /// Planning or extraction failed for one image
    ExtractionFailed {
        index: usize,
        rom: Option<PathBuf>,
        error: String,
    },

    /// Every selected image has been handled
    Completed {
        succeeded: usize,
        failed: usize,
        dry_run: bool,
    },
}

/// Trait for receiving extract events
///
/// Implementations:
/// - ConsoleEventSink: progress lines on the terminal
/// - JsonEventSink: NDJSON event stream for build scripts
/// - NoopEventSink: silent operation
pub trait ExtractEventSink {
    fn on_event(&self, event: ExtractEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ExtractEventSink for NoopEventSink {
    fn on_event(&self, _event: ExtractEvent) {}
}
