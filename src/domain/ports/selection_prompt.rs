//! Selection Prompt Port
//!
//! Asks a human to pick among several identified ROMs. The call blocks until
//! an answer arrives; the pipeline has nothing else to do in the meantime.

use crate::domain::entities::IdentifiedImage;
use crate::error::RomexResult;

/// What the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChoice {
    /// Zero-based index into the presented list
    One(usize),
    /// Every presented candidate
    All,
}

/// Trait for interactive candidate selection.
///
/// Candidates arrive already in display order. Implementations keep asking
/// until the input parses; they never fall back to a default.
pub trait SelectionPrompt {
    fn choose(
        &mut self,
        candidates: &[IdentifiedImage],
        allow_all: bool,
    ) -> RomexResult<SelectionChoice>;
}

/// Parse one line of user input against a list of `count` entries.
///
/// Accepts a 1-based entry number, or `a` when `allow_all` is set.
pub fn parse_selection(input: &str, count: usize, allow_all: bool) -> Option<SelectionChoice> {
    let input = input.trim();
    if allow_all && input.eq_ignore_ascii_case("a") {
        return Some(SelectionChoice::All);
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Some(SelectionChoice::One(n - 1)),
        _ => None,
    }
}

/// One line per candidate, numbered from 1.
///
/// Verbose listings add the header checksum and matched version.
pub fn candidate_lines(candidates: &[IdentifiedImage], verbose: bool) -> Vec<String> {
    let width = candidates.len().to_string().len().max(2);
    candidates
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let mut line = format!(
                "[{:>width$}] {}",
                i + 1,
                image.path().display(),
                width = width
            );
            if verbose {
                line.push_str(&format!(
                    "  ({} -> {})",
                    image.checksum(),
                    image.descriptor().name()
                ));
            }
            line
        })
        .collect()
}
