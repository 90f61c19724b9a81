//! Property tests for candidate selection.

use proptest::prelude::*;

use romex::domain::ports::{SelectionChoice, SelectionPrompt};
use romex::domain::services::{select, SelectOptions};
use romex::{HeaderChecksum, IdentifiedImage, RomexError, RomexResult, VersionDescriptor};

/// Prompt that must never be consulted.
struct Unreachable;

impl SelectionPrompt for Unreachable {
    fn choose(&mut self, _: &[IdentifiedImage], _: bool) -> RomexResult<SelectionChoice> {
        panic!("prompt consulted");
    }
}

/// Prompt that picks the given entry and remembers what it was shown.
struct Picks {
    index: usize,
    shown: Vec<String>,
}

impl SelectionPrompt for Picks {
    fn choose(&mut self, candidates: &[IdentifiedImage], _: bool) -> RomexResult<SelectionChoice> {
        self.shown = candidates
            .iter()
            .map(|c| c.descriptor().name().to_string())
            .collect();
        Ok(SelectionChoice::One(self.index))
    }
}

fn image(name: &str, file: &str) -> IdentifiedImage {
    IdentifiedImage::new(
        file,
        VersionDescriptor::new(name, false),
        HeaderChecksum::new(0),
    )
}

fn candidates() -> impl Strategy<Value = Vec<IdentifiedImage>> {
    proptest::collection::vec(("[A-Z]{1,6}", "[a-z]{1,6}"), 2..8).prop_map(|pairs| {
        pairs
            .iter()
            .map(|(name, file)| image(name, &format!("{}.z64", file)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one candidate is returned as-is in either mode, unprompted.
    #[test]
    fn property_single_candidate_needs_no_prompt(
        name in "[A-Z_0-9.]{1,12}",
        interactive in any::<bool>(),
    ) {
        let only = image(&name, "rom.z64");
        let options = SelectOptions::new(".").with_interactive(interactive);

        let selected = select(vec![only], &options, &mut Unreachable).unwrap();
        prop_assert_eq!(selected.len(), 1);
        prop_assert_eq!(selected[0].descriptor().name(), name.as_str());
    }

    /// PROPERTY: several candidates without a prompt are always ambiguous.
    #[test]
    fn property_many_candidates_non_interactive_fail(list in candidates()) {
        let count = list.len();
        let options = SelectOptions::new(".");

        let err = select(list, &options, &mut Unreachable).unwrap_err();
        let is_ambiguous = matches!(
            err,
            RomexError::AmbiguousSelectionNonInteractive { count: c } if c == count
        );
        prop_assert!(is_ambiguous);
    }

    /// PROPERTY: the prompt sees candidates sorted by version name, and the
    /// chosen entry is the one it saw at that position.
    #[test]
    fn property_prompt_sees_sorted_candidates(list in candidates(), pick in any::<prop::sample::Index>()) {
        let count = list.len();
        let mut prompt = Picks { index: pick.index(count), shown: Vec::new() };
        let options = SelectOptions::new(".").with_interactive(true);

        let selected = select(list, &options, &mut prompt).unwrap();

        let mut sorted = prompt.shown.clone();
        sorted.sort();
        prop_assert_eq!(&prompt.shown, &sorted);
        prop_assert_eq!(selected.len(), 1);
        prop_assert_eq!(selected[0].descriptor().name(), prompt.shown[prompt.index].as_str());
    }
}

#[test]
fn empty_candidates_fail_in_both_modes() {
    for interactive in [false, true] {
        let options = SelectOptions::new("roms").with_interactive(interactive);
        let err = select(Vec::new(), &options, &mut Unreachable).unwrap_err();
        assert!(matches!(err, RomexError::NoCandidatesFound { .. }));
    }
}
