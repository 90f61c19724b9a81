//! romex - ROM identification and asset-extraction planner
//!
//! Identifies N64 ROM images of the supported titles by their header
//! checksum, lets the user pick among several candidates, and builds and runs
//! the ZAPD extractor command line for header generation or archive
//! packaging.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ExtractOptions, ExtractResult, ExtractUseCase};
pub use config::Config;
pub use domain::entities::{BuildPlan, IdentifiedImage};
pub use domain::services::{FingerprintRegistry, PlanBuilder, PlanRequest};
pub use domain::value_objects::{ExtractMode, HeaderChecksum, RomByteOrder, VersionDescriptor};
pub use error::{RomexError, RomexResult};
