//! InstallableItem entity - one file the current source tree wants installed
//!
//! Items are produced fresh by the collector on every run and never persisted.

use std::path::{Component, Path, PathBuf};

/// Normalize a relative path into a logical path (always forward slashes,
/// no `.` components).
pub fn normalize_logical_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether `logical_path` is already in normal form and stays below any root
/// it is joined to: relative, slash-separated, no `.`/`..`, no empty segment.
pub fn is_contained_logical_path(logical_path: &str) -> bool {
    !logical_path.is_empty()
        && !logical_path.contains('\\')
        && logical_path.split('/').all(|part| {
            let mut components = Path::new(part).components();
            matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(name)), None) if name == part
            )
        })
}

/// Resolve a logical path below a destination root.
///
/// Only plain name segments are joined; `..`, `.`, roots and prefixes are
/// dropped, so the result never leaves `root`.
pub fn destination_path(root: &Path, logical_path: &str) -> PathBuf {
    logical_path
        .split('/')
        .flat_map(|part| Path::new(part).components())
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .fold(root.to_path_buf(), |acc, part| acc.join(part))
}

/// A file the current source tree wants installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallableItem {
    /// Relative destination path (unique key, slash-separated, case-sensitive)
    logical_path: String,
    /// Where the bytes come from
    source: PathBuf,
    /// Text asset eligible for placeholder substitution
    transformed: bool,
    /// Receives the executable bit after being written
    executable: bool,
}

impl InstallableItem {
    pub fn new(logical_path: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            logical_path: logical_path.into(),
            source: source.into(),
            transformed: false,
            executable: false,
        }
    }

    pub fn with_transform(mut self, transformed: bool) -> Self {
        self.transformed = transformed;
        self
    }

    pub fn with_executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }

    pub fn logical_path(&self) -> &str {
        &self.logical_path
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_transformed(&self) -> bool {
        self.transformed
    }

    pub fn is_executable(&self) -> bool {
        self.executable
    }
}
