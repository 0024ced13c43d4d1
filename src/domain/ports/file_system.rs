//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the domain layer to inspect and mutate the destination
//! without depending on a concrete implementation (local disk, in-memory).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Directory not empty (expected during best-effort pruning)
    NotEmpty(PathBuf),
    /// Other I/O error
    Io { path: PathBuf, source: std::io::Error },
}

impl FsError {
    /// Classify an `io::Error` for a specific path.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::DirectoryNotEmpty => FsError::NotEmpty(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(p) | FsError::PermissionDenied(p) | FsError::NotEmpty(p) => p,
            FsError::Io { path, .. } => path,
        }
    }

    /// Convert back to an `io::Error`, keeping the kind.
    pub fn into_io(self) -> std::io::Error {
        match self {
            FsError::NotFound(p) => std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not found: {}", p.display()),
            ),
            FsError::PermissionDenied(p) => std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", p.display()),
            ),
            FsError::NotEmpty(p) => std::io::Error::new(
                std::io::ErrorKind::DirectoryNotEmpty,
                format!("directory not empty: {}", p.display()),
            ),
            FsError::Io { source, .. } => source,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::NotEmpty(path) => write!(f, "Directory not empty: {}", path.display()),
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MemoryFs` (tests) - in-memory map
pub trait FileSystem {
    /// Read raw file content
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content to a file atomically, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a regular file exists
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a directory exists
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory, only if it is empty
    fn remove_empty_dir(&self, path: &Path) -> FsResult<()>;

    /// Mark a file executable (no-op where unsupported)
    fn set_executable(&self, path: &Path) -> FsResult<()>;
}
