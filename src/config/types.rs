//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{DEFAULT_EXTRACTOR_DIR, DEFAULT_XML_ROOT};
use crate::error::RomexResult;

use super::loader::{self, ConfigWarning};

/// Where the extractor and its asset tree live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Explicit extractor executable; located automatically when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_xml_root")]
    pub xml_root: PathBuf,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            path: None,
            xml_root: default_xml_root(),
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_xml_root() -> PathBuf {
    PathBuf::from(DEFAULT_XML_ROOT)
}

fn default_assets_dir() -> String {
    DEFAULT_EXTRACTOR_DIR.to_string()
}

/// Archive generation inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default)]
    pub custom_assets_path: Option<PathBuf>,

    #[serde(default)]
    pub custom_otr_file: Option<String>,

    /// Overrides the per-title default archive name
    #[serde(default)]
    pub otr_file: Option<String>,

    #[serde(default)]
    pub port_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_search_dir")]
    pub search_dir: PathBuf,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_dir: default_search_dir(),
        }
    }
}

fn default_search_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RomexResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RomexResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ROMEX_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
