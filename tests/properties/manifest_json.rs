//! Property tests for the on-disk manifest format.

use proptest::prelude::*;

use mindsystem_install::infrastructure::repositories::{from_json, to_json};
use mindsystem_install::{Fingerprint, Manifest};

fn logical_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Serialized manifests parse back to the same entries.
    #[test]
    fn property_manifest_survives_serialization(
        entries in proptest::collection::btree_map(
            logical_path(),
            proptest::collection::vec(any::<u8>(), 0..64),
            0..16
        )
    ) {
        let mut manifest = Manifest::new();
        for (path, content) in &entries {
            manifest.set(path.clone(), Fingerprint::of(content));
        }

        let json = to_json(&manifest).unwrap();
        let parsed = from_json(&json).unwrap();

        prop_assert_eq!(parsed.entry_map(), manifest.entry_map());
    }

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_from_json_never_panics(content in ".{0,256}") {
        let _ = from_json(&content);
    }
}
