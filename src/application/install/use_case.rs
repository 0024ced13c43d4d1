//! Install Use Case
//!
//! Orchestrates one install run:
//! 1. Load the package layout and collect source items
//! 2. Load the previous manifest (corruption degrades to empty)
//! 3. Reconcile manifest, destination and sources
//! 4. Resolve conflicts
//! 5. Apply the plan and save the new manifest
//! 6. Write the version marker and probe for Python
//!
//! Pure orchestration: classification and conflict rules live in domain services.

use chrono::Utc;

use crate::config::{self, PackageLayout};
use crate::domain::entities::Manifest;
use crate::domain::ports::{ConflictPrompt, FileSystem, ManifestRepository};
use crate::domain::services::{ConflictResolver, Disposition, Fingerprinter, ReconcilePlan, Reconciler};
use crate::error::{InstallError, InstallResult};
use crate::infrastructure::probe::{PythonStatus, RuntimeProbe, MIN_PYTHON};
use crate::infrastructure::source::{CollectedSources, SourceCollector};

use super::applier::{ApplyOutcome, Applier};
use super::options::InstallOptions;
use super::result::{CategoryReport, InstallReport};

/// Installed directory that needs a Python runtime
pub const LOOKUP_CLI_PATH: &str = "mindsystem/scripts/ms-lookup";

/// Install use case - parameterized by its ports
pub struct InstallUseCase<FS, MR, P>
where
    FS: FileSystem,
    MR: ManifestRepository,
    P: RuntimeProbe,
{
    file_system: FS,
    manifest_repo: MR,
    probe: P,
}

impl<FS, MR, P> InstallUseCase<FS, MR, P>
where
    FS: FileSystem,
    MR: ManifestRepository,
    P: RuntimeProbe,
{
    pub fn new(file_system: FS, manifest_repo: MR, probe: P) -> Self {
        Self {
            file_system,
            manifest_repo,
            probe,
        }
    }

    /// Run an install. `prompt` is consulted only in interactive mode.
    pub fn execute(
        &self,
        options: &InstallOptions,
        prompt: &mut dyn ConflictPrompt,
    ) -> InstallResult<InstallReport> {
        let mut report = InstallReport::new(&options.dest_root, options.scope);

        let (layout, config_warnings) = config::load_layout(&options.package_root)?;
        report
            .warnings
            .extend(config_warnings.iter().map(ToString::to_string));
        report.version = config::package_version(&options.package_root, &layout);

        let sources = SourceCollector::new(&layout)?.collect(&options.package_root)?;
        tracing::info!(
            items = sources.items.len(),
            dest = %options.dest_root.display(),
            "collected package sources"
        );

        let manifest_path = options.manifest_path();
        let loaded = self.manifest_repo.load_or_empty(&manifest_path);
        if let Some(err) = &loaded.corruption {
            tracing::warn!(path = %manifest_path.display(), error = %err, "discarding unreadable manifest");
            report.warnings.push(format!(
                "install manifest was unreadable ({}); every file is treated as new",
                err
            ));
        }
        let previous = loaded.manifest;

        let fingerprinter = Fingerprinter::new(options.transform());
        let plan = Reconciler::new(&self.file_system, &fingerprinter).reconcile(
            &previous,
            &options.dest_root,
            sources.items.clone(),
        )?;
        tracing::debug!(
            total = plan.total_files(),
            conflicts = plan.conflicts.len(),
            orphans = plan.orphans.len(),
            "reconciled"
        );

        let resolution = ConflictResolver::resolve(&plan.conflicts, options.mode, prompt)?;
        if let Some(warning) = &resolution.warning {
            report.warnings.push(warning.clone());
        }
        report.conflicts = plan.conflicts.len();
        report.prompts = resolution.prompts;

        let outcome = Applier::new(&self.file_system, &options.dest_root).apply(
            &plan,
            &resolution,
            &previous,
        )?;

        let manifest = outcome.manifest.clone().with_installed_at(Utc::now());
        self.manifest_repo
            .save(&manifest, &manifest_path)
            .map_err(|e| InstallError::ManifestSave {
                path: manifest_path.clone(),
                message: e.to_string(),
            })?;

        let version_path = options.version_path();
        self.file_system
            .write(&version_path, report.version.as_bytes())
            .map_err(|e| InstallError::WriteFailed {
                path: version_path.clone(),
                source: e.into_io(),
            })?;

        if self.file_system.is_dir(&options.dest(LOOKUP_CLI_PATH)) {
            let status = self.probe.python();
            if let Some(warning) = python_warning(status) {
                report.warnings.push(warning);
            }
            report.python = Some(status);
        }

        report.categories = categories(&layout, &sources, &plan, &outcome);
        report.written = outcome.written;
        report.kept = outcome.kept;
        report.removed = outcome.removed;
        report.pruned_dirs = outcome.pruned_dirs;
        for (path, cause) in &outcome.failed_removals {
            report
                .warnings
                .push(format!("could not remove {}: {}", path, cause));
        }
        report.failed_removals = outcome.failed_removals.into_iter().map(|(p, _)| p).collect();
        report.manifest = manifest;

        Ok(report)
    }

    /// Load the manifest currently recorded for `options`, if readable.
    pub fn current_manifest(&self, options: &InstallOptions) -> Manifest {
        self.manifest_repo
            .load_or_empty(&options.manifest_path())
            .manifest
    }
}

fn python_warning(status: PythonStatus) -> Option<String> {
    let (min_major, min_minor) = MIN_PYTHON;
    match status {
        PythonStatus::Supported { .. } => None,
        PythonStatus::TooOld { major, minor } => Some(format!(
            "Python {}.{}+ required for ms-lookup (found {}.{})",
            min_major, min_minor, major, minor
        )),
        PythonStatus::Missing => Some(format!(
            "Python not found - ms-lookup CLI requires Python {}.{}+",
            min_major, min_minor
        )),
    }
}

/// Per-root counts, in layout order.
fn categories(
    layout: &PackageLayout,
    sources: &CollectedSources,
    plan: &ReconcilePlan,
    outcome: &ApplyOutcome,
) -> Vec<CategoryReport> {
    let mut reports: Vec<CategoryReport> = layout
        .roots
        .iter()
        .map(|root| CategoryReport::new(root.label()))
        .collect();
    let mut other = CategoryReport::new("other");

    let slot = |logical: &str| -> usize {
        layout
            .root_for(logical)
            .and_then(|root| layout.roots.iter().position(|r| r == root))
            .unwrap_or(usize::MAX)
    };

    for planned in &plan.to_install {
        let index = slot(planned.logical_path());
        let report = reports.get_mut(index).unwrap_or(&mut other);
        if outcome.kept.iter().any(|k| k == planned.logical_path()) {
            report.kept += 1;
            continue;
        }
        match planned.disposition {
            Disposition::New => report.new += 1,
            Disposition::Unchanged => report.unchanged += 1,
            Disposition::Adopted
            | Disposition::Updated
            | Disposition::Converged
            | Disposition::Conflict => report.updated += 1,
        }
    }

    for removed in &outcome.removed {
        let index = slot(removed);
        reports.get_mut(index).unwrap_or(&mut other).removed += 1;
    }

    let present: Vec<bool> = layout
        .roots
        .iter()
        .map(|root| {
            sources
                .roots
                .iter()
                .any(|summary| summary.dest == root.dest && summary.present)
        })
        .collect();

    let mut result: Vec<CategoryReport> = reports
        .into_iter()
        .zip(present)
        .filter(|(report, present)| *present || report.total() > 0)
        .map(|(report, _)| report)
        .collect();
    if other.total() > 0 {
        result.push(other);
    }
    result
}
