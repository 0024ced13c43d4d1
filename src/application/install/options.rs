//! Install Options
//!
//! Built once from the command line and environment, then passed by
//! reference. Nothing downstream reads process-wide argument state.

use std::path::{Path, PathBuf};

use crate::config::{MANIFEST_PATH, VERSION_PATH};
use crate::domain::entities::destination_path;
use crate::domain::services::ResolutionMode;
use crate::domain::value_objects::{ContentTransform, InstallScope};

/// Options for the install use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Package root containing the source trees
    pub package_root: PathBuf,
    /// Destination root (`~/.claude`, a custom config dir, or `./.claude`)
    pub dest_root: PathBuf,
    /// Global or project-local install
    pub scope: InstallScope,
    /// Destination was given explicitly (`--config-dir` / `CLAUDE_CONFIG_DIR`)
    pub custom_root: bool,
    /// How conflicts are decided
    pub mode: ResolutionMode,
}

impl InstallOptions {
    pub fn new(package_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            package_root: package_root.into(),
            dest_root: dest_root.into(),
            scope: InstallScope::default(),
            custom_root: false,
            mode: ResolutionMode::default(),
        }
    }

    pub fn with_scope(mut self, scope: InstallScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_custom_root(mut self, custom_root: bool) -> Self {
        self.custom_root = custom_root;
        self
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Placeholder substitution for this destination.
    pub fn transform(&self) -> ContentTransform {
        let custom = (self.scope.is_global() && self.custom_root).then_some(self.dest_root.as_path());
        ContentTransform::for_install(self.scope, custom)
    }

    pub fn manifest_path(&self) -> PathBuf {
        destination_path(&self.dest_root, MANIFEST_PATH)
    }

    pub fn version_path(&self) -> PathBuf {
        destination_path(&self.dest_root, VERSION_PATH)
    }

    pub fn dest(&self, logical_path: &str) -> PathBuf {
        destination_path(&self.dest_root, logical_path)
    }

    pub fn package_root(&self) -> &Path {
        &self.package_root
    }
}
