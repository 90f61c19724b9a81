//! Extract Options

use std::path::PathBuf;

use crate::domain::services::PlanRequest;
use crate::domain::value_objects::ExtractMode;

/// Options for one extract run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Mode and archive inputs handed to the planner
    pub request: PlanRequest,
    /// ROM given on the command line; skips discovery
    pub rom: Option<PathBuf>,
    /// Directory scanned when no ROM is given
    pub search_dir: PathBuf,
    /// Whether the selection prompt may be shown
    pub interactive: bool,
    /// Process every identified candidate without asking
    pub all: bool,
    pub verbose: bool,
    /// Build and report plans without running the extractor
    pub dry_run: bool,
}

impl ExtractOptions {
    pub fn new(request: PlanRequest) -> Self {
        Self {
            request,
            rom: None,
            search_dir: PathBuf::from("."),
            interactive: false,
            all: false,
            verbose: false,
            dry_run: false,
        }
    }

    pub fn mode(&self) -> ExtractMode {
        self.request.mode
    }

    pub fn with_rom(mut self, rom: impl Into<PathBuf>) -> Self {
        self.rom = Some(rom.into());
        self
    }

    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = dir.into();
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
