//! Source tree collector
//!
//! Walks every configured source root and maps its files onto logical
//! destination paths.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{PackageLayout, SourceRoot};
use crate::domain::entities::{normalize_logical_path, InstallableItem};
use crate::error::{InstallError, InstallResult};
use crate::infrastructure::fs::{TreeWalker, WalkedFile};

/// What one source root contributed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub label: String,
    pub dest: String,
    /// Whether the root exists in the package
    pub present: bool,
    pub files: usize,
}

/// Items produced by one collection pass
#[derive(Debug, Clone, Default)]
pub struct CollectedSources {
    /// Sorted by logical path
    pub items: Vec<InstallableItem>,
    /// In layout order
    pub roots: Vec<RootSummary>,
}

/// Collects installable items from a package root according to a layout.
pub struct SourceCollector<'a> {
    layout: &'a PackageLayout,
    walker: TreeWalker,
}

impl<'a> SourceCollector<'a> {
    pub fn new(layout: &'a PackageLayout) -> InstallResult<Self> {
        Ok(Self {
            layout,
            walker: TreeWalker::new(layout.exclusion_rules()?),
        })
    }

    /// Collect every item below `package_root`.
    ///
    /// Fails before anything is installed when the package root or a required
    /// root is missing, when two roots produce the same logical path, or when
    /// a file would land on a reserved metadata path.
    pub fn collect(&self, package_root: &Path) -> InstallResult<CollectedSources> {
        if !package_root.is_dir() {
            return Err(InstallError::SourceNotFound {
                path: package_root.to_path_buf(),
            });
        }

        let mut owners: BTreeMap<String, (PathBuf, InstallableItem)> = BTreeMap::new();
        let mut roots = Vec::with_capacity(self.layout.roots.len());

        for root in &self.layout.roots {
            let source = package_root.join(&root.source);
            let mut summary = RootSummary {
                label: root.label().to_string(),
                dest: root.dest.clone(),
                present: source.exists(),
                files: 0,
            };

            if !summary.present {
                if root.required {
                    return Err(InstallError::SourceNotFound { path: source });
                }
                tracing::debug!(root = %root.source.display(), "optional source root absent");
                roots.push(summary);
                continue;
            }

            let single_file = source.is_file();
            self.walker.visit(&source, |file: WalkedFile| {
                let item = self.item_for(root, &file, single_file);
                let logical = item.logical_path().to_string();

                if self.layout.is_reserved(&logical) {
                    return Err(InstallError::ReservedPath { path: logical });
                }
                if let Some((first, _)) = owners.get(&logical) {
                    return Err(InstallError::SourceCollision {
                        path: logical,
                        first: first.clone(),
                        second: source.clone(),
                    });
                }

                owners.insert(logical, (source.clone(), item));
                summary.files += 1;
                Ok(())
            })?;

            tracing::debug!(root = %summary.label, files = summary.files, "collected source root");
            roots.push(summary);
        }

        // BTreeMap iteration is already in logical-path order
        let items = owners.into_values().map(|(_, item)| item).collect();
        Ok(CollectedSources { items, roots })
    }

    fn item_for(&self, root: &SourceRoot, file: &WalkedFile, single_file: bool) -> InstallableItem {
        let dest = normalize_logical_path(Path::new(&root.dest));
        let logical = if single_file {
            dest
        } else {
            format!("{}/{}", dest, normalize_logical_path(&file.relative))
        };

        InstallableItem::new(logical, file.path.clone())
            .with_transform(root.transform && self.layout.is_text(&file.path))
            .with_executable(self.layout.is_executable(&file.path))
    }
}
