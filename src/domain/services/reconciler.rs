//! Reconciliation service
//!
//! Compares three views of the destination: the manifest left by the last
//! install, the files currently on disk, and the files the source tree wants
//! installed now. Produces a plan; never writes anything.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::entities::{
    destination_path, is_contained_logical_path, Conflict, InstallableItem, Manifest,
};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::Fingerprinter;
use crate::domain::value_objects::Fingerprint;
use crate::error::{InstallError, InstallResult};

/// How an item relates to what is already installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Disposition {
    /// Nothing on disk at the destination
    New,
    /// A file exists but the manifest never recorded it
    Adopted,
    /// Installed copy is pristine and identical to the candidate
    Unchanged,
    /// Installed copy is pristine; upstream changed
    Updated,
    /// Installed copy was edited, but the edit matches the candidate exactly
    Converged,
    /// Installed copy was edited and upstream changed differently
    Conflict,
}

impl Disposition {
    pub fn label(&self) -> &'static str {
        match self {
            Disposition::New => "new",
            Disposition::Adopted => "adopted",
            Disposition::Unchanged => "unchanged",
            Disposition::Updated => "updated",
            Disposition::Converged => "converged",
            Disposition::Conflict => "conflict",
        }
    }
}

/// Current state of a destination file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveState {
    Missing,
    Present(Fingerprint),
}

impl LiveState {
    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        match self {
            LiveState::Missing => None,
            LiveState::Present(fp) => Some(fp),
        }
    }
}

/// Classify a single path.
///
/// `recorded` is the manifest entry, `live` the state on disk (fingerprinted
/// after the transform), `candidate` the fingerprint of the new content.
pub fn classify(
    recorded: Option<&Fingerprint>,
    live: &LiveState,
    candidate: &Fingerprint,
) -> Disposition {
    let live = match live {
        LiveState::Missing => return Disposition::New,
        LiveState::Present(fp) => fp,
    };

    match recorded {
        None => Disposition::Adopted,
        Some(recorded) if recorded == live => {
            if live == candidate {
                Disposition::Unchanged
            } else {
                Disposition::Updated
            }
        }
        Some(_) if live == candidate => Disposition::Converged,
        Some(_) => Disposition::Conflict,
    }
}

/// An item scheduled for installation, with the exact bytes to write
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedInstall {
    pub item: InstallableItem,
    pub disposition: Disposition,
    /// Post-transform content
    pub content: Vec<u8>,
    /// Fingerprint of `content`
    pub fingerprint: Fingerprint,
    /// Fingerprint of the file currently on disk, if any
    pub live: Option<Fingerprint>,
}

impl PlannedInstall {
    pub fn logical_path(&self) -> &str {
        self.item.logical_path()
    }

    pub fn is_conflict(&self) -> bool {
        self.disposition == Disposition::Conflict
    }
}

/// Result of reconciling one install run
#[derive(Debug, Clone, Default)]
pub struct ReconcilePlan {
    /// Every source item, in logical-path order
    pub to_install: Vec<PlannedInstall>,
    /// Logical paths already identical to their candidate
    pub unchanged: Vec<String>,
    /// Previously installed paths that no longer have a source, still on disk
    pub orphans: Vec<String>,
    /// Paths needing a decision before they may be overwritten
    pub conflicts: Vec<Conflict>,
}

impl ReconcilePlan {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn count(&self, disposition: Disposition) -> usize {
        self.to_install
            .iter()
            .filter(|p| p.disposition == disposition)
            .count()
    }

    pub fn get(&self, logical_path: &str) -> Option<&PlannedInstall> {
        self.to_install
            .iter()
            .find(|p| p.logical_path() == logical_path)
    }

    pub fn total_files(&self) -> usize {
        self.to_install.len()
    }
}

/// Builds a [`ReconcilePlan`] by reading through a [`FileSystem`].
///
/// Source and destination are both read through the same port; nothing is
/// written, removed or chmod-ed here.
pub struct Reconciler<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    fingerprinter: &'a Fingerprinter,
}

impl<'a, F: FileSystem + ?Sized> Reconciler<'a, F> {
    pub fn new(fs: &'a F, fingerprinter: &'a Fingerprinter) -> Self {
        Self { fs, fingerprinter }
    }

    /// Reconcile `items` against `manifest` and the files below `dest_root`.
    pub fn reconcile(
        &self,
        manifest: &Manifest,
        dest_root: &Path,
        mut items: Vec<InstallableItem>,
    ) -> InstallResult<ReconcilePlan> {
        items.sort_by(|a, b| a.logical_path().cmp(b.logical_path()));

        let mut plan = ReconcilePlan::default();
        let mut wanted = BTreeSet::new();

        for item in items {
            wanted.insert(item.logical_path().to_string());

            let source = self
                .fs
                .read(item.source())
                .map_err(|e| read_failed(item.source(), e))?;
            let content = self
                .fingerprinter
                .render(&source, item.is_transformed())
                .into_owned();
            let candidate = Fingerprint::of(&content);

            let dest = destination_path(dest_root, item.logical_path());
            let live = self.live_state(&dest, item.is_transformed())?;
            let disposition = classify(manifest.get(item.logical_path()), &live, &candidate);

            match disposition {
                Disposition::Unchanged => plan.unchanged.push(item.logical_path().to_string()),
                Disposition::Conflict => plan
                    .conflicts
                    .push(Conflict::locally_modified(item.logical_path())),
                _ => {}
            }

            plan.to_install.push(PlannedInstall {
                item,
                disposition,
                content,
                fingerprint: candidate,
                live: live.fingerprint().cloned(),
            });
        }

        // Entries whose file is already gone are dropped silently: the applier
        // rebuilds the manifest from the install set.
        // Keys that could resolve outside `dest_root` are never orphans.
        plan.orphans = manifest
            .paths()
            .filter(|path| !wanted.contains(*path))
            .filter(|path| {
                let contained = is_contained_logical_path(path);
                if !contained {
                    tracing::warn!(path = %path, "ignoring manifest entry outside the destination");
                }
                contained
            })
            .filter(|path| self.fs.is_file(&destination_path(dest_root, path)))
            .map(str::to_string)
            .collect();

        Ok(plan)
    }

    fn live_state(&self, dest: &Path, transformed: bool) -> InstallResult<LiveState> {
        match self.fs.read(dest) {
            Ok(bytes) => Ok(LiveState::Present(
                self.fingerprinter.fingerprint(&bytes, transformed),
            )),
            Err(FsError::NotFound(_)) => Ok(LiveState::Missing),
            Err(e) => Err(read_failed(dest, e)),
        }
    }
}

fn read_failed(path: &Path, err: FsError) -> InstallError {
    InstallError::ReadFailed {
        path: path.to_path_buf(),
        source: err.into_io(),
    }
}
