//! Property tests for build plan construction.

use std::path::PathBuf;

use proptest::prelude::*;

use romex::domain::services::{AssetLayout, PlanBuilder, PlanRequest};
use romex::{ExtractMode, HeaderChecksum, IdentifiedImage, RomexError, VersionDescriptor};

fn version() -> impl Strategy<Value = VersionDescriptor> {
    let name = proptest::string::string_regex("(OOT|MM)_[A-Z]{2,4}_[0-9]\\.[0-9]").unwrap();
    name.prop_map(|name| {
        let secondary = name.starts_with("MM");
        VersionDescriptor::new(name, secondary)
    })
}

fn rom_path() -> impl Strategy<Value = PathBuf> {
    proptest::string::string_regex("[a-z0-9_]{1,12}\\.(z64|n64|v64)")
        .unwrap()
        .prop_map(PathBuf::from)
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::string::string_regex("[A-Za-z0-9._ -]{0,10}").unwrap())
}

fn builder() -> PlanBuilder {
    PlanBuilder::new("../ZAPDTR/ZAPD.out", AssetLayout::default())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: header plans never carry archive flags, whatever else is set.
    #[test]
    fn property_header_plans_have_no_archive_flags(
        descriptor in version(),
        rom in rom_path(),
        custom in optional_text(),
        otr in optional_text(),
        port in optional_text(),
    ) {
        let mut request = PlanRequest::new(ExtractMode::Headers);
        request.custom_assets_path = custom.clone().map(PathBuf::from);
        request.custom_otr_file = custom;
        request.otr_file = otr;
        request.port_version = port;

        let image = IdentifiedImage::new(&rom, descriptor, HeaderChecksum::new(0));
        let plan = builder().build(&image, &request).unwrap();
        let args = plan.args();

        for flag in ["--customAssetsPath", "--customOtrFile", "--otrfile", "-se"] {
            prop_assert!(!args.iter().any(|a| a == flag), "{} in {:?}", flag, args);
        }
        prop_assert_eq!(plan.otr_file(), None);
        let gsf = args.iter().position(|a| a == "-gsf").unwrap();
        prop_assert_eq!(args[gsf + 1].as_str(), "1");
    }

    /// PROPERTY: rendering the same plan twice gives the same arguments.
    #[test]
    fn property_plan_rendering_is_deterministic(
        descriptor in version(),
        rom in rom_path(),
        port in optional_text(),
    ) {
        let mut request = PlanRequest::new(ExtractMode::Archive)
            .with_custom_assets("assets/custom", "soh.o2r");
        request.port_version = port.clone();

        let image = IdentifiedImage::new(&rom, descriptor, HeaderChecksum::new(0));
        let first = builder().build(&image, &request).unwrap();
        let second = builder().build(&image, &request).unwrap();

        prop_assert_eq!(first.args(), second.args());
        prop_assert_eq!(first.args(), first.args());

        let has_port = port.as_deref().is_some_and(|p| !p.trim().is_empty());
        prop_assert_eq!(first.args().iter().any(|a| a == "--portVer"), has_port);
    }

    /// PROPERTY: archive mode with an empty custom assets path never builds.
    #[test]
    fn property_archive_requires_custom_assets(
        descriptor in version(),
        rom in rom_path(),
        name in "[a-z]{1,8}\\.o2r",
    ) {
        let request = PlanRequest::new(ExtractMode::Archive).with_custom_assets("", name);
        let image = IdentifiedImage::new(&rom, descriptor, HeaderChecksum::new(0));

        let is_missing_path = matches!(
            builder().build(&image, &request),
            Err(RomexError::MissingRequiredPath { .. })
        );
        prop_assert!(is_missing_path);
    }

    /// PROPERTY: the default archive name follows the title family.
    #[test]
    fn property_default_archive_name_follows_title(
        descriptor in version(),
        rom in rom_path(),
    ) {
        let expected = if descriptor.is_secondary_title() { "mm.o2r" } else { "oot.o2r" };
        let request = PlanRequest::new(ExtractMode::Archive)
            .with_custom_assets("assets/custom", "soh.o2r");
        let image = IdentifiedImage::new(&rom, descriptor, HeaderChecksum::new(0));

        let plan = builder().build(&image, &request).unwrap();
        prop_assert_eq!(plan.otr_file(), Some(expected));
    }
}
