//! Candidate Selector
//!
//! Decides which identified ROMs a run acts on. Only a genuine ambiguity in
//! interactive mode reaches the prompt; every other case is decided here.

use std::path::PathBuf;

use crate::domain::entities::IdentifiedImage;
use crate::domain::ports::{SelectionChoice, SelectionPrompt};
use crate::error::{RomexError, RomexResult};

/// Options controlling selection.
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// A human is available to answer prompts
    pub interactive: bool,
    /// Offer "all" in the prompt
    pub allow_all: bool,
    /// Where the candidates were discovered, for error messages
    pub search_dir: PathBuf,
}

impl SelectOptions {
    pub fn new(search_dir: impl Into<PathBuf>) -> Self {
        Self {
            interactive: false,
            allow_all: true,
            search_dir: search_dir.into(),
        }
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_allow_all(mut self, allow_all: bool) -> Self {
        self.allow_all = allow_all;
        self
    }
}

/// Resolve the images to process.
///
/// - no candidates: `NoCandidatesFound`
/// - one candidate: returned as-is, the prompt is never consulted
/// - several, non-interactive: `AmbiguousSelectionNonInteractive`
/// - several, interactive: prompt over the candidates sorted by version name
///   then path
pub fn select(
    mut candidates: Vec<IdentifiedImage>,
    options: &SelectOptions,
    prompt: &mut dyn SelectionPrompt,
) -> RomexResult<Vec<IdentifiedImage>> {
    match candidates.len() {
        0 => Err(RomexError::NoCandidatesFound {
            dir: options.search_dir.clone(),
        }),
        1 => Ok(candidates),
        count if !options.interactive => {
            Err(RomexError::AmbiguousSelectionNonInteractive { count })
        }
        _ => {
            candidates.sort_by(IdentifiedImage::display_order);
            match prompt.choose(&candidates, options.allow_all)? {
                SelectionChoice::All if options.allow_all => Ok(candidates),
                SelectionChoice::All => Err(RomexError::SelectionAborted),
                SelectionChoice::One(index) => candidates
                    .into_iter()
                    .nth(index)
                    .map(|image| vec![image])
                    .ok_or(RomexError::SelectionAborted),
            }
        }
    }
}

/// Candidates in the order they are listed and processed.
pub fn sorted(mut candidates: Vec<IdentifiedImage>) -> Vec<IdentifiedImage> {
    candidates.sort_by(IdentifiedImage::display_order);
    candidates
}
