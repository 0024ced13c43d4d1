//! In-memory FileSystem for tests and dry planning.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    executable: BTreeSet<PathBuf>,
    deny_read: BTreeSet<PathBuf>,
    deny_remove: BTreeSet<PathBuf>,
}

impl State {
    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn has_children(&self, dir: &Path) -> bool {
        self.files.keys().any(|p| p.parent() == Some(dir))
            || self.dirs.iter().any(|p| p.parent() == Some(dir))
    }
}

/// File system held entirely in memory
///
/// Directories are tracked explicitly so pruning behaves as on disk: writing
/// a file creates its ancestors, and removing the file leaves them behind.
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: RefCell<State>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its ancestors).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let mut state = self.state.borrow_mut();
        state.add_ancestors(path);
        state
            .files
            .insert(path.to_path_buf(), content.as_ref().to_vec());
    }

    /// Create an (empty) directory and its ancestors.
    pub fn mkdir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state.borrow_mut();
        state.add_ancestors(path);
        state.dirs.insert(path.to_path_buf());
    }

    /// Make reads of `path` fail with permission denied.
    pub fn deny_read(&self, path: impl AsRef<Path>) {
        self.state
            .borrow_mut()
            .deny_read
            .insert(path.as_ref().to_path_buf());
    }

    /// Make removal of `path` fail with permission denied.
    pub fn deny_remove(&self, path: impl AsRef<Path>) {
        self.state
            .borrow_mut()
            .deny_remove
            .insert(path.as_ref().to_path_buf());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state.borrow().files.get(path.as_ref()).cloned()
    }

    pub fn is_executable(&self, path: impl AsRef<Path>) -> bool {
        self.state.borrow().executable.contains(path.as_ref())
    }

    pub fn file_count(&self) -> usize {
        self.state.borrow().files.len()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        let state = self.state.borrow();
        if state.deny_read.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut state = self.state.borrow_mut();
        state.add_ancestors(path);
        state.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state.borrow().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.borrow().dirs.contains(path)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state.borrow_mut();
        if state.deny_remove.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state.executable.remove(path);
        state
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn remove_empty_dir(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state.borrow_mut();
        if !state.dirs.contains(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        if state.has_children(path) {
            return Err(FsError::NotEmpty(path.to_path_buf()));
        }
        state.dirs.remove(path);
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state.borrow_mut();
        if !state.files.contains_key(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        state.executable.insert(path.to_path_buf());
        Ok(())
    }
}
