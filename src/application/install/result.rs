//! Install Result
//!
//! What one install run did, for the summary view and for tests.

use std::path::PathBuf;

use crate::domain::entities::Manifest;
use crate::domain::value_objects::InstallScope;
use crate::infrastructure::probe::PythonStatus;

/// Per-category file counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryReport {
    pub label: String,
    pub new: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub kept: usize,
    pub removed: usize,
}

impl CategoryReport {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.new + self.updated + self.unchanged + self.kept + self.removed
    }

    pub fn installed(&self) -> usize {
        self.new + self.updated + self.unchanged
    }
}

/// Result of an install operation
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub dest_root: PathBuf,
    pub scope: InstallScope,
    /// Version written to the version marker
    pub version: String,
    /// Layout order; roots with no files and no activity are omitted
    pub categories: Vec<CategoryReport>,
    /// Logical paths written this run
    pub written: Vec<String>,
    /// Conflicted paths whose local edit was kept
    pub kept: Vec<String>,
    /// Orphans deleted
    pub removed: Vec<String>,
    /// Orphans that could not be deleted (retried next run)
    pub failed_removals: Vec<String>,
    /// Directories pruned after orphan removal
    pub pruned_dirs: Vec<PathBuf>,
    /// Number of conflicts detected
    pub conflicts: usize,
    /// Number of interactive questions asked
    pub prompts: usize,
    /// Python probe outcome, when the lookup CLI is installed
    pub python: Option<PythonStatus>,
    /// Non-fatal problems worth showing the user
    pub warnings: Vec<String>,
    /// Manifest as saved
    pub manifest: Manifest,
}

impl InstallReport {
    pub fn new(dest_root: impl Into<PathBuf>, scope: InstallScope) -> Self {
        Self {
            dest_root: dest_root.into(),
            scope,
            version: String::new(),
            categories: Vec::new(),
            written: Vec::new(),
            kept: Vec::new(),
            removed: Vec::new(),
            failed_removals: Vec::new(),
            pruned_dirs: Vec::new(),
            conflicts: 0,
            prompts: 0,
            python: None,
            warnings: Vec::new(),
            manifest: Manifest::new(),
        }
    }

    pub fn category(&self, label: &str) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.label == label)
    }

    /// Sum over every category.
    pub fn totals(&self) -> CategoryReport {
        self.categories
            .iter()
            .fold(CategoryReport::new("total"), |mut acc, c| {
                acc.new += c.new;
                acc.updated += c.updated;
                acc.unchanged += c.unchanged;
                acc.kept += c.kept;
                acc.removed += c.removed;
                acc
            })
    }

    pub fn has_changes(&self) -> bool {
        let totals = self.totals();
        totals.new + totals.updated + totals.removed > 0
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
