//! Property tests for the fingerprint registry.

use std::collections::HashSet;

use proptest::prelude::*;

use romex::domain::services::{FingerprintEntry, FingerprintRegistry};
use romex::{HeaderChecksum, RomexError, VersionDescriptor};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a checksum absent from the built-in table never identifies.
    #[test]
    fn property_unknown_checksums_never_identify(value in any::<u32>()) {
        let registry = FingerprintRegistry::builtin().unwrap();
        let known: HashSet<u32> = registry
            .entries()
            .iter()
            .map(|(checksum, _)| checksum.value())
            .collect();
        prop_assume!(!known.contains(&value));

        prop_assert!(registry.lookup(&HeaderChecksum::new(value)).is_none());
    }

    /// PROPERTY: `from_entries` accepts a table exactly when its digests are unique.
    #[test]
    fn property_from_entries_rejects_duplicates(
        values in proptest::collection::vec(any::<u32>(), 1..12)
    ) {
        let entries: Vec<FingerprintEntry> = values
            .iter()
            .enumerate()
            .map(|(i, v)| FingerprintEntry::new(
                HeaderChecksum::new(*v),
                VersionDescriptor::new(format!("V{}", i), false),
            ))
            .collect();
        let unique = values.iter().collect::<HashSet<_>>().len() == values.len();

        match FingerprintRegistry::from_entries(entries) {
            Ok(registry) => {
                prop_assert!(unique);
                prop_assert_eq!(registry.len(), values.len());
                for (i, v) in values.iter().enumerate() {
                    let found = registry.lookup(&HeaderChecksum::new(*v)).unwrap();
                    let expected = format!("V{}", i);
                    prop_assert_eq!(found.name(), expected.as_str());
                }
            }
            Err(RomexError::DuplicateFingerprint { .. }) => prop_assert!(!unique),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
