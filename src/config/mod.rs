//! Configuration module for romex
//!
//! Settings are layered, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (ROMEX_*)
//! 3. `--config <FILE>`, else `./romex.toml`
//! 4. User config (`<config dir>/romex/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_env_overrides_from,
    ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{ArchiveConfig, Config, DiscoveryConfig, ExtractorConfig};
