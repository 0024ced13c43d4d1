//! Plan applier
//!
//! Executes a resolved reconcile plan against the destination:
//! 1. Write every planned item not in the keep set
//! 2. Delete orphans
//! 3. Prune directories the deletions emptied
//!
//! The resulting manifest records exactly what is now on disk.

use std::path::{Path, PathBuf};

use crate::domain::entities::{destination_path, Manifest};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::{ReconcilePlan, Resolution};
use crate::error::{InstallError, InstallResult};
use crate::infrastructure::fs::prune_empty_dirs;

/// What applying a plan did
#[derive(Debug, Clone, Default)]
pub struct ApplyOutcome {
    /// Manifest entries for the post-apply state (no timestamp yet)
    pub manifest: Manifest,
    pub written: Vec<String>,
    pub kept: Vec<String>,
    pub removed: Vec<String>,
    pub failed_removals: Vec<(String, String)>,
    pub pruned_dirs: Vec<PathBuf>,
}

/// Applies plans below one destination root.
pub struct Applier<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    dest_root: &'a Path,
}

impl<'a, F: FileSystem + ?Sized> Applier<'a, F> {
    pub fn new(fs: &'a F, dest_root: &'a Path) -> Self {
        Self { fs, dest_root }
    }

    /// Apply `plan` with the conflict decisions in `resolution`.
    ///
    /// Write failures abort immediately. Orphan deletion failures are logged
    /// and the old manifest entry is carried over so the next run retries.
    pub fn apply(
        &self,
        plan: &ReconcilePlan,
        resolution: &Resolution,
        previous: &Manifest,
    ) -> InstallResult<ApplyOutcome> {
        let mut outcome = ApplyOutcome::default();

        for planned in &plan.to_install {
            let logical = planned.logical_path();

            if resolution.keeps(logical) {
                match &planned.live {
                    Some(live) => outcome.manifest.set(logical, live.clone()),
                    // a kept path always has a live file; nothing to record otherwise
                    None => continue,
                }
                tracing::info!(path = logical, "kept local edit");
                outcome.kept.push(logical.to_string());
                continue;
            }

            let dest = destination_path(self.dest_root, logical);
            self.fs
                .write(&dest, &planned.content)
                .map_err(|e| write_failed(&dest, e))?;
            if planned.item.is_executable() {
                self.fs
                    .set_executable(&dest)
                    .map_err(|e| write_failed(&dest, e))?;
            }

            tracing::debug!(path = logical, disposition = planned.disposition.label(), "installed");
            outcome.manifest.set(logical, planned.fingerprint.clone());
            outcome.written.push(logical.to_string());
        }

        let mut deleted_files = Vec::new();
        for orphan in &plan.orphans {
            let dest = destination_path(self.dest_root, orphan);
            match self.fs.remove_file(&dest) {
                Ok(()) | Err(FsError::NotFound(_)) => {
                    tracing::info!(path = %orphan, "removed orphan");
                    outcome.removed.push(orphan.clone());
                    deleted_files.push(dest);
                }
                Err(e) => {
                    tracing::warn!(path = %orphan, error = %e, "could not remove orphan, will retry next run");
                    if let Some(recorded) = previous.get(orphan) {
                        outcome.manifest.set(orphan.clone(), recorded.clone());
                    }
                    outcome.failed_removals.push((orphan.clone(), e.to_string()));
                }
            }
        }

        outcome.pruned_dirs = prune_empty_dirs(self.fs, self.dest_root, &deleted_files);

        Ok(outcome)
    }
}

fn write_failed(path: &Path, err: FsError) -> InstallError {
    InstallError::WriteFailed {
        path: path.to_path_buf(),
        source: err.into_io(),
    }
}
