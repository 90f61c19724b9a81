//! Domain Entities

mod build_plan;
mod identified_image;

pub use build_plan::{
    BuildPlan, CustomAssets, PlanKind, RomExtraction, RomOutput, ARCHIVE_EXPORTER,
    OUTPUT_PLACEHOLDER,
};
pub use identified_image::IdentifiedImage;
