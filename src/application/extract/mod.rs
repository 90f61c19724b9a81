//! Extract use case
//!
//! Identify the ROM images to work on, plan one extractor invocation per
//! image and run them in order.

mod options;
mod result;
mod use_case;


pub use options::ExtractOptions;
pub use result::{ExtractResult, ItemOutcome, ItemStatus};
pub use use_case::ExtractUseCase;
