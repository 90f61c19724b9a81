//! Extract Result

use std::path::{Path, PathBuf};

use crate::domain::entities::BuildPlan;

/// What happened to one planned invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Plan built but not executed (dry run)
    Planned,
    Succeeded,
    /// Planning or execution failed; holds the rendered error
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ItemOutcome {
    /// Source image; `None` for custom-archive runs
    pub rom: Option<PathBuf>,
    /// Absent when the plan itself could not be built
    pub plan: Option<BuildPlan>,
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub fn rom(&self) -> Option<&Path> {
        self.rom.as_deref()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, ItemStatus::Failed(_))
    }
}

/// Result of an extract run, one outcome per image in processing order
#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    pub items: Vec<ItemOutcome>,
    pub dry_run: bool,
}

impl ExtractResult {
    pub fn is_success(&self) -> bool {
        !self.items.iter().any(ItemOutcome::is_failure)
    }

    pub fn failed(&self) -> usize {
        self.items.iter().filter(|item| item.is_failure()).count()
    }

    /// Items that did not fail (executed or, on dry runs, planned)
    pub fn succeeded(&self) -> usize {
        self.items.len() - self.failed()
    }

    pub fn plans(&self) -> impl Iterator<Item = &BuildPlan> {
        self.items.iter().filter_map(|item| item.plan.as_ref())
    }
}
