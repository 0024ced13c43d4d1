//! Source tree walking and destination directory pruning.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ExclusionRules;

/// A regular file found below a walked root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Absolute (or root-joined) path on disk
    pub path: PathBuf,
    /// Path relative to the walked root
    pub relative: PathBuf,
}

/// Recursive, sorted directory walker with name-based exclusions
///
/// Excluded directories are pruned without descending. Hidden files are
/// visited; VCS ignore files are not consulted.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    rules: ExclusionRules,
}

impl TreeWalker {
    pub fn new(rules: ExclusionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }

    /// Every regular file below `root`, in file-name order per directory.
    pub fn walk(&self, root: &Path) -> io::Result<Vec<WalkedFile>> {
        let mut files = Vec::new();
        self.visit(root, |file| {
            files.push(file);
            Ok::<(), io::Error>(())
        })?;
        Ok(files)
    }

    /// Call `visitor` for every regular file below `root`, in file-name order
    /// per directory. Stops at the first error.
    ///
    /// A single-file `root` is visited once with its own name as the
    /// relative path.
    pub fn visit<E, V>(&self, root: &Path, mut visitor: V) -> Result<(), E>
    where
        E: From<io::Error>,
        V: FnMut(WalkedFile) -> Result<(), E>,
    {
        if root.is_file() {
            let name = root.file_name().map(PathBuf::from).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")
            })?;
            return visitor(WalkedFile {
                path: root.to_path_buf(),
                relative: name,
            });
        }

        let rules = self.rules.clone();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !rules.excludes(entry.path(), is_dir)
            })
            .build();

        for entry in walker {
            let entry = entry.map_err(into_io)?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| entry.path().to_path_buf());
            visitor(WalkedFile {
                path: entry.path().to_path_buf(),
                relative,
            })?;
        }
        Ok(())
    }
}

fn into_io(err: ignore::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}

/// Remove directories left empty by deleted files.
///
/// Walks up from each removed file's parent, deepest first, stopping before
/// `root` and before any direct child of `root` (the category anchors).
/// Non-empty or already-missing directories are skipped silently.
/// Returns the directories actually removed.
pub fn prune_empty_dirs<F, I>(fs: &F, root: &Path, removed_files: I) -> Vec<PathBuf>
where
    F: FileSystem + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let min_depth = root.components().count() + 2;

    let mut candidates: BTreeSet<(usize, PathBuf)> = BTreeSet::new();
    for file in removed_files {
        let Some(parent) = file.as_ref().parent() else {
            continue;
        };
        if !parent.starts_with(root) {
            continue;
        }
        for dir in parent.ancestors() {
            let depth = dir.components().count();
            if depth < min_depth {
                break;
            }
            candidates.insert((depth, dir.to_path_buf()));
        }
    }

    let mut pruned = Vec::new();
    for (_, dir) in candidates.into_iter().rev() {
        if fs.remove_empty_dir(&dir).is_ok() {
            tracing::debug!(dir = %dir.display(), "pruned empty directory");
            pruned.push(dir);
        }
    }
    pruned
}
