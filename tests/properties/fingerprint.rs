//! Property tests for fingerprints and the install-root rewrite.

use std::path::PathBuf;

use proptest::prelude::*;

use mindsystem_install::domain::services::Fingerprinter;
use mindsystem_install::domain::value_objects::{ContentTransform, ROOT_PLACEHOLDER};
use mindsystem_install::{Fingerprint, InstallScope};

/// Text that sometimes references the install root.
fn asset_text() -> impl Strategy<Value = String> {
    let chunk = prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9 #@/._\n-]{0,24}").unwrap(),
        Just(ROOT_PLACEHOLDER.to_string()),
        Just(format!("@{}mindsystem/workflows/", ROOT_PLACEHOLDER)),
        Just("~/.claude".to_string()),
    ];
    proptest::collection::vec(chunk, 0..8).prop_map(|chunks| chunks.concat())
}

fn custom_root() -> impl Strategy<Value = PathBuf> {
    let segment = proptest::string::string_regex("[a-z0-9._-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4)
        .prop_map(|segments| PathBuf::from(format!("/{}", segments.join("/"))))
}

fn install_transform() -> impl Strategy<Value = ContentTransform> {
    prop_oneof![
        Just(ContentTransform::for_install(InstallScope::Global, None)),
        Just(ContentTransform::for_install(InstallScope::Local, None)),
        custom_root().prop_map(|root| {
            ContentTransform::for_install(InstallScope::Global, Some(&root))
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Fingerprints are deterministic, well formed lowercase hex.
    #[test]
    fn property_fingerprint_is_stable_hex(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        let first = Fingerprint::of(&content);
        let second = Fingerprint::of(&content);

        prop_assert_eq!(&first, &second);
        prop_assert!(first.is_well_formed(), "malformed: {}", first);
        prop_assert_eq!(first.as_str().len(), 64);
    }

    /// PROPERTY: Rewriting already-rewritten text changes nothing.
    #[test]
    fn property_install_transform_is_idempotent(
        text in asset_text(),
        transform in install_transform()
    ) {
        let once = transform.apply(text.as_bytes()).into_owned();
        let twice = transform.apply(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Installed content fingerprints like its source.
    ///
    /// The live file holds rendered bytes; fingerprinting it re-applies the
    /// transform, which must land on the candidate fingerprint.
    #[test]
    fn property_installed_bytes_match_candidate_fingerprint(
        text in asset_text(),
        transform in install_transform()
    ) {
        let fingerprinter = Fingerprinter::new(transform);
        let candidate = fingerprinter.fingerprint(text.as_bytes(), true);
        let installed = fingerprinter.render(text.as_bytes(), true).into_owned();

        prop_assert_eq!(fingerprinter.fingerprint(&installed, true), candidate);
    }

    /// PROPERTY: Text without the placeholder passes through untouched.
    #[test]
    fn property_text_without_placeholder_is_unchanged(
        text in proptest::string::string_regex("[A-Za-z0-9 ./\n-]{0,128}").unwrap(),
        transform in install_transform()
    ) {
        let rendered = transform.apply(text.as_bytes());
        prop_assert_eq!(rendered.as_ref(), text.as_bytes());
    }

    /// PROPERTY: Non-text items are never rewritten.
    #[test]
    fn property_untransformed_items_keep_raw_bytes(
        text in asset_text(),
        transform in install_transform()
    ) {
        let fingerprinter = Fingerprinter::new(transform);
        prop_assert_eq!(
            fingerprinter.fingerprint(text.as_bytes(), false),
            Fingerprint::of(text.as_bytes())
        );
    }
}
