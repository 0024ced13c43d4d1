//! ManifestRepository port - abstraction for manifest persistence
//!
//! This trait allows the domain layer to load/save manifests
//! without knowing about JSON serialization details.

use std::path::Path;

use crate::domain::entities::Manifest;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug)]
pub enum ManifestError {
    /// The file exists but could not be parsed
    InvalidFormat(String),
    /// The file was written by an incompatible format version
    UnsupportedVersion { found: String, expected: String },
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::InvalidFormat(msg) => write!(f, "invalid manifest format: {}", msg),
            ManifestError::UnsupportedVersion { found, expected } => write!(
                f,
                "manifest format version '{}' is not supported (expected '{}')",
                found, expected
            ),
            ManifestError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ManifestError {}

/// Outcome of a fail-soft manifest load
#[derive(Debug)]
pub struct LoadedManifest {
    /// The manifest (empty when missing or unreadable)
    pub manifest: Manifest,
    /// Why the stored manifest was discarded, if it was
    pub corruption: Option<ManifestError>,
}

impl LoadedManifest {
    pub fn is_corrupted(&self) -> bool {
        self.corruption.is_some()
    }
}

/// Abstract repository for manifest persistence
pub trait ManifestRepository {
    /// Load the manifest at `path`. A missing file is `Ok(None)`.
    fn load(&self, path: &Path) -> ManifestResult<Option<Manifest>>;

    /// Save the manifest to `path` as a single atomic replace.
    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()>;

    /// Load, degrading any failure to an empty manifest.
    ///
    /// A corrupted manifest means "treat everything as new", which is safe
    /// because re-installing is idempotent.
    fn load_or_empty(&self, path: &Path) -> LoadedManifest {
        match self.load(path) {
            Ok(manifest) => LoadedManifest {
                manifest: manifest.unwrap_or_default(),
                corruption: None,
            },
            Err(err) => LoadedManifest {
                manifest: Manifest::new(),
                corruption: Some(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FixedRepo(RefCell<Option<ManifestResult<Option<Manifest>>>>);

    impl ManifestRepository for FixedRepo {
        fn load(&self, _path: &Path) -> ManifestResult<Option<Manifest>> {
            self.0.borrow_mut().take().expect("load called once")
        }

        fn save(&self, _manifest: &Manifest, _path: &Path) -> ManifestResult<()> {
            Ok(())
        }
    }

    #[test]
    fn manifest_error_display() {
        let err = ManifestError::InvalidFormat("expected value at line 1".to_string());
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn load_or_empty_missing_is_clean() {
        let repo = FixedRepo(RefCell::new(Some(Ok(None))));
        let loaded = repo.load_or_empty(Path::new("m.json"));
        assert!(loaded.manifest.is_empty());
        assert!(!loaded.is_corrupted());
    }

    #[test]
    fn load_or_empty_degrades_on_error() {
        let repo = FixedRepo(RefCell::new(Some(Err(ManifestError::InvalidFormat(
            "eof".into(),
        )))));
        let loaded = repo.load_or_empty(Path::new("m.json"));
        assert!(loaded.manifest.is_empty());
        assert!(loaded.is_corrupted());
    }
}
