//! Build Planner
//!
//! Turns an identified ROM (or a custom-asset request) into a validated
//! `BuildPlan`. All validation happens here so that nothing half-specified
//! ever reaches the process runner.

use std::path::{Path, PathBuf};

use crate::domain::entities::{
    BuildPlan, CustomAssets, IdentifiedImage, PlanKind, RomExtraction, RomOutput,
    OUTPUT_PLACEHOLDER,
};
use crate::domain::value_objects::{ExtractMode, VersionDescriptor};
use crate::error::{RomexError, RomexResult};

/// Default root of the per-version XML trees.
pub const DEFAULT_XML_ROOT: &str = "assets/xml";

/// Default directory holding file lists and `Config_<id>.xml` files.
pub const DEFAULT_EXTRACTOR_DIR: &str = "assets/extractor";

/// Fixed directory layout the extractor reads its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    pub xml_root: PathBuf,
    pub extractor_dir: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            xml_root: PathBuf::from(DEFAULT_XML_ROOT),
            extractor_dir: DEFAULT_EXTRACTOR_DIR.to_string(),
        }
    }
}

impl AssetLayout {
    pub fn with_xml_root(mut self, xml_root: impl Into<PathBuf>) -> Self {
        self.xml_root = xml_root.into();
        self
    }

    pub fn with_extractor_dir(mut self, dir: impl Into<String>) -> Self {
        self.extractor_dir = dir.into();
        self
    }

    pub fn file_list_dir(&self) -> String {
        format!("{}/filelists", self.extractor_dir)
    }

    pub fn config_file(&self, config_tree_id: &str) -> String {
        format!("{}/Config_{}.xml", self.extractor_dir, config_tree_id)
    }

    pub fn xml_dir(&self, config_tree_id: &str) -> PathBuf {
        self.xml_root.join(config_tree_id)
    }
}

/// Everything about a plan that does not come from the ROM itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub mode: ExtractMode,
    pub custom_assets_path: Option<PathBuf>,
    pub custom_otr_file: Option<String>,
    /// Overrides the per-title default archive name
    pub otr_file: Option<String>,
    pub port_version: Option<String>,
}

impl PlanRequest {
    pub fn new(mode: ExtractMode) -> Self {
        Self {
            mode,
            custom_assets_path: None,
            custom_otr_file: None,
            otr_file: None,
            port_version: None,
        }
    }

    pub fn with_custom_assets(
        mut self,
        assets_path: impl Into<PathBuf>,
        archive_name: impl Into<String>,
    ) -> Self {
        self.custom_assets_path = Some(assets_path.into());
        self.custom_otr_file = Some(archive_name.into());
        self
    }

    pub fn with_otr_file(mut self, otr_file: impl Into<String>) -> Self {
        self.otr_file = Some(otr_file.into());
        self
    }

    pub fn with_port_version(mut self, version: impl Into<String>) -> Self {
        self.port_version = Some(version.into());
        self
    }

    /// Check the inputs the mode requires without building anything.
    pub fn validate(&self) -> RomexResult<()> {
        match self.mode {
            ExtractMode::Headers => Ok(()),
            ExtractMode::Archive | ExtractMode::CustomArchive => self.custom_assets().map(drop),
        }
    }

    /// Custom asset inputs, or the first one that is missing.
    fn custom_assets(&self) -> RomexResult<CustomAssets> {
        let mode = self.mode.label();
        let assets_path = self
            .custom_assets_path
            .as_ref()
            .filter(|p| !p.to_string_lossy().trim().is_empty())
            .ok_or(RomexError::MissingRequiredPath {
                what: "custom assets path",
                mode,
            })?;
        let archive_name = non_empty(self.custom_otr_file.as_deref()).ok_or(
            RomexError::MissingRequiredPath {
                what: "custom archive file name",
                mode,
            },
        )?;
        Ok(CustomAssets {
            assets_path: assets_path.clone(),
            archive_name: archive_name.to_string(),
        })
    }

    fn port_version(&self) -> Option<String> {
        non_empty(self.port_version.as_deref()).map(str::to_string)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Builds plans against one resolved executable and asset layout.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    executable: PathBuf,
    layout: AssetLayout,
}

impl PlanBuilder {
    pub fn new(executable: impl Into<PathBuf>, layout: AssetLayout) -> Self {
        Self {
            executable: executable.into(),
            layout,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    /// Plan the extraction of an identified ROM.
    pub fn build(&self, image: &IdentifiedImage, request: &PlanRequest) -> RomexResult<BuildPlan> {
        self.build_for(image.descriptor(), image.path(), request)
    }

    /// Plan the extraction of `rom_path`, already known to be `descriptor`.
    pub fn build_for(
        &self,
        descriptor: &VersionDescriptor,
        rom_path: &Path,
        request: &PlanRequest,
    ) -> RomexResult<BuildPlan> {
        let output = match request.mode {
            ExtractMode::Headers => RomOutput::Headers,
            ExtractMode::Archive => {
                let custom = request.custom_assets()?;
                let otr_file = non_empty(request.otr_file.as_deref())
                    .unwrap_or(descriptor.title().default_archive_name())
                    .to_string();
                RomOutput::Archive { custom, otr_file }
            }
            ExtractMode::CustomArchive => {
                return Err(RomexError::InvalidModeCombination(
                    "a custom archive build does not read a ROM".to_string(),
                ))
            }
        };

        let tree = descriptor.config_tree_id();
        let extraction = RomExtraction {
            input_xml_path: self.layout.xml_dir(tree),
            rom_path: rom_path.to_path_buf(),
            file_list_dir: self.layout.file_list_dir(),
            output_dir: OUTPUT_PLACEHOLDER.to_string(),
            output_source_dir: OUTPUT_PLACEHOLDER.to_string(),
            config_path: self.layout.config_file(tree),
            output,
        };

        Ok(BuildPlan::new(
            self.executable.clone(),
            PlanKind::Rom(extraction),
            request.port_version(),
        ))
    }

    /// Plan a custom archive build that reads no ROM.
    pub fn build_custom_archive(&self, request: &PlanRequest) -> RomexResult<BuildPlan> {
        if request.mode != ExtractMode::CustomArchive {
            return Err(RomexError::InvalidModeCombination(format!(
                "{} needs a ROM; use a custom archive request for --norom builds",
                request.mode
            )));
        }
        let custom = request.custom_assets()?;
        Ok(BuildPlan::new(
            self.executable.clone(),
            PlanKind::CustomArchive(custom),
            request.port_version(),
        ))
    }
}
