//! Domain Services
//!
//! Stateless logic over the domain types: version lookup, candidate
//! selection and plan construction.

pub mod planner;
pub mod registry;
pub mod selector;

pub use planner::{AssetLayout, PlanBuilder, PlanRequest, DEFAULT_EXTRACTOR_DIR, DEFAULT_XML_ROOT};
pub use registry::{FingerprintEntry, FingerprintRegistry};
pub use selector::{select, sorted, SelectOptions};
