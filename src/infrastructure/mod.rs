//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All filesystem and process
//! I/O lives here.
//!
//! ## Structure
//!
//! - `prober` - reads ROM headers and identifies images
//! - `discovery` - scans a directory for candidate images
//! - `locator` - finds the extractor executable
//! - `process` - runs the extractor
//! - `prompt` - line-based and terminal selection prompts
//! - `events/` - console and NDJSON event sinks

pub mod discovery;
pub mod events;
pub mod locator;
pub mod process;
pub mod prober;
pub mod prompt;

pub use discovery::{discover, has_rom_extension, rom_files, ROM_EXTENSIONS};
pub use events::{ConsoleEventSink, ConsoleStyle, JsonEventSink};
pub use locator::{ExecutableSource, ExtractorLocator, Platform, ResolvedExecutable};
pub use process::CommandRunner;
pub use prober::{ImageProber, HEADER_LEN, MIN_ROM_SIZE};
pub use prompt::{LinePrompt, TerminalPrompt};
