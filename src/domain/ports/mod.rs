//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod extract_events;
pub mod process_runner;
pub mod selection_prompt;

pub use extract_events::{ExtractEvent, ExtractEventSink, NoopEventSink};
pub use process_runner::{ProcessRunner, ProcessStatus};
pub use selection_prompt::{candidate_lines, parse_selection, SelectionChoice, SelectionPrompt};
