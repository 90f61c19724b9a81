//! Domain Layer
//!
//! ROM identification and plan construction, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - IdentifiedImage, BuildPlan
//! - `value_objects/` - checksums, byte order, versions, modes
//! - `services/` - registry, selector, planner
//! - `ports/` - interfaces the infrastructure layer implements

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
