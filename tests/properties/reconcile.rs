//! Property tests for three-way reconciliation.

use std::collections::BTreeMap;
use std::path::Path;

use proptest::prelude::*;

use mindsystem_install::domain::entities::InstallableItem;
use mindsystem_install::domain::services::{
    classify, Disposition, Fingerprinter, LiveState, Reconciler,
};
use mindsystem_install::domain::value_objects::ContentTransform;
use mindsystem_install::infrastructure::MemoryFs;
use mindsystem_install::{Fingerprint, InstallScope, Manifest};

fn fingerprint() -> impl Strategy<Value = Fingerprint> {
    // A small alphabet so equal fingerprints come up often.
    (0u8..4).prop_map(|n| Fingerprint::of(&[n]))
}

fn live_state() -> impl Strategy<Value = LiveState> {
    prop_oneof![
        Just(LiveState::Missing),
        fingerprint().prop_map(LiveState::Present),
    ]
}

/// Package files: logical path -> content
fn package() -> impl Strategy<Value = BTreeMap<String, String>> {
    let dir = prop_oneof![
        Just("commands/ms"),
        Just("agents"),
        Just("mindsystem/workflows"),
    ];
    let name = proptest::string::string_regex("[a-z]{1,8}\\.md").unwrap();
    let content = prop_oneof![
        proptest::string::string_regex("[a-z \n]{0,32}").unwrap(),
        Just("See @~/.claude/mindsystem/workflows/help.md\n".to_string()),
    ];
    proptest::collection::btree_map(
        (dir, name).prop_map(|(dir, name)| format!("{}/{}", dir, name)),
        content,
        1..8,
    )
}

fn reconciler_inputs(
    fs: &MemoryFs,
    files: &BTreeMap<String, String>,
) -> Vec<InstallableItem> {
    files
        .iter()
        .map(|(path, content)| {
            let source = Path::new("/pkg").join(path);
            fs.insert(&source, content);
            InstallableItem::new(path.clone(), source).with_transform(true)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A conflict needs a recorded entry, a live edit, and a
    /// candidate different from that edit.
    #[test]
    fn property_conflict_requires_divergent_edit(
        recorded in proptest::option::of(fingerprint()),
        live in live_state(),
        candidate in fingerprint()
    ) {
        let disposition = classify(recorded.as_ref(), &live, &candidate);

        match &live {
            LiveState::Missing => prop_assert_eq!(disposition, Disposition::New),
            LiveState::Present(live_fp) => {
                let is_conflict = disposition == Disposition::Conflict;
                let expected = matches!(&recorded, Some(r) if r != live_fp) && live_fp != &candidate;
                prop_assert_eq!(is_conflict, expected);
                if recorded.is_none() {
                    prop_assert_eq!(disposition, Disposition::Adopted);
                }
            }
        }
    }

    /// PROPERTY: Unchanged means all three views agree.
    #[test]
    fn property_unchanged_only_when_everything_matches(
        recorded in proptest::option::of(fingerprint()),
        live in live_state(),
        candidate in fingerprint()
    ) {
        let disposition = classify(recorded.as_ref(), &live, &candidate);
        let all_equal = recorded.as_ref() == live.fingerprint()
            && live.fingerprint() == Some(&candidate);
        prop_assert_eq!(disposition == Disposition::Unchanged, all_equal);
    }

    /// PROPERTY: Installing a plan and reconciling again yields no work.
    #[test]
    fn property_second_reconcile_is_a_no_op(
        files in package(),
        local in any::<bool>()
    ) {
        let scope = if local { InstallScope::Local } else { InstallScope::Global };
        let fingerprinter = Fingerprinter::new(ContentTransform::for_install(scope, None));
        let fs = MemoryFs::new();
        let dest = Path::new("/dest");
        let reconciler = Reconciler::new(&fs, &fingerprinter);

        let first = reconciler
            .reconcile(&Manifest::new(), dest, reconciler_inputs(&fs, &files))
            .unwrap();
        prop_assert_eq!(first.count(Disposition::New), files.len());

        let mut manifest = Manifest::new();
        for planned in &first.to_install {
            fs.insert(dest.join(planned.logical_path()), &planned.content);
            manifest.set(planned.logical_path(), planned.fingerprint.clone());
        }

        let second = reconciler
            .reconcile(&manifest, dest, reconciler_inputs(&fs, &files))
            .unwrap();
        prop_assert_eq!(second.unchanged.len(), files.len());
        prop_assert!(second.conflicts.is_empty());
        prop_assert!(second.orphans.is_empty());
    }

    /// PROPERTY: Dropping a file upstream makes it an orphan, nothing else.
    #[test]
    fn property_dropped_source_becomes_orphan(files in package()) {
        let fingerprinter = Fingerprinter::new(ContentTransform::identity());
        let fs = MemoryFs::new();
        let dest = Path::new("/dest");
        let reconciler = Reconciler::new(&fs, &fingerprinter);

        let first = reconciler
            .reconcile(&Manifest::new(), dest, reconciler_inputs(&fs, &files))
            .unwrap();
        let mut manifest = Manifest::new();
        for planned in &first.to_install {
            fs.insert(dest.join(planned.logical_path()), &planned.content);
            manifest.set(planned.logical_path(), planned.fingerprint.clone());
        }

        let mut remaining = files.clone();
        let dropped = remaining.keys().next().cloned().unwrap();
        remaining.remove(&dropped);

        let second = reconciler
            .reconcile(&manifest, dest, reconciler_inputs(&fs, &remaining))
            .unwrap();
        prop_assert_eq!(second.orphans, vec![dropped]);
        prop_assert_eq!(second.unchanged.len(), remaining.len());
    }
}
