//! JSON Event Sink
//!
//! Outputs extract events as NDJSON for build scripts.

use crate::domain::ports::{ExtractEvent, ExtractEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that writes one JSON object per line
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON shape of an event.
pub fn event_to_json(event: &ExtractEvent) -> serde_json::Value {
    match event {
        ExtractEvent::DiscoveryStarted { dir } => serde_json::json!({
            "event": "discovery_start",
            "dir": dir.display().to_string(),
        }),

        ExtractEvent::CandidateRejected { path, reason } => serde_json::json!({
            "event": "candidate_rejected",
            "path": path.display().to_string(),
            "reason": reason,
        }),

        ExtractEvent::ImageIdentified {
            path,
            version,
            checksum,
            byte_order,
            content_hash,
        } => serde_json::json!({
            "event": "identified",
            "path": path.display().to_string(),
            "version": version,
            "checksum": checksum,
            "byte_order": byte_order,
            "sha256": content_hash,
        }),

        ExtractEvent::Selected {
            selected,
            candidates,
        } => serde_json::json!({
            "event": "selected",
            "selected": selected,
            "candidates": candidates,
        }),

        ExtractEvent::PlanReady {
            index,
            mode,
            rom,
            command,
        } => serde_json::json!({
            "event": "plan",
            "index": index,
            "mode": mode.label(),
            "rom": rom.as_ref().map(|p| p.display().to_string()),
            "command": command,
        }),

        ExtractEvent::ExtractionSucceeded { index, rom } => serde_json::json!({
            "event": "item_done",
            "index": index,
            "rom": rom.as_ref().map(|p| p.display().to_string()),
        }),

        ExtractEvent::ExtractionFailed { index, rom, error } => serde_json::json!({
            "event": "item_error",
            "index": index,
            "rom": rom.as_ref().map(|p| p.display().to_string()),
            "error": error,
        }),

        ExtractEvent::Completed {
            succeeded,
            failed,
            dry_run,
        } => serde_json::json!({
            "event": "complete",
            "status": if *failed == 0 { "success" } else { "failure" },
            "succeeded": succeeded,
            "failed": failed,
            "dry_run": dry_run,
        }),
    }
}

impl ExtractEventSink for JsonEventSink {
    fn on_event(&self, event: ExtractEvent) {
        self.write_event(event_to_json(&event));
    }
}
