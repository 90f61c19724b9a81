//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on the Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ExtractUseCase` - identify, select, plan and run the extractor

pub mod extract;

pub use extract::{ExtractOptions, ExtractResult, ExtractUseCase, ItemOutcome, ItemStatus};
