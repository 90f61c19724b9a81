//! Event sink implementations

pub mod console;
pub mod json;

pub use console::{ConsoleEventSink, ConsoleStyle};
pub use json::JsonEventSink;
