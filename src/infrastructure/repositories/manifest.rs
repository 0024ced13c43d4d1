//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port. The manifest lives inside the
//! destination tree, so it is read and written through the `FileSystem` port
//! (atomic replace on save).

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{is_contained_logical_path, Manifest};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::manifest_repository::{
    ManifestError, ManifestRepository, ManifestResult,
};
use crate::domain::value_objects::Fingerprint;
use crate::infrastructure::fs::LocalFs;

/// JSON-backed manifest repository
pub struct JsonManifestRepository<F: FileSystem = LocalFs> {
    fs: F,
}

impl JsonManifestRepository<LocalFs> {
    /// Create a new repository on the local disk
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonManifestRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> JsonManifestRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }
}

/// On-disk representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestFile {
    format_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    installed_at: Option<String>,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Serialize a manifest to its JSON text (pretty, trailing newline excluded).
pub fn to_json(manifest: &Manifest) -> ManifestResult<String> {
    let file = ManifestFile {
        format_version: manifest.format_version().to_string(),
        installed_at: manifest
            .installed_at()
            .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        entries: manifest
            .entries()
            .map(|(path, fp)| (path.to_string(), fp.as_str().to_string()))
            .collect(),
    };
    serde_json::to_string_pretty(&file).map_err(|e| ManifestError::InvalidFormat(e.to_string()))
}

/// Parse manifest JSON text.
///
/// Any format version other than the current one, any entry whose value is
/// not a well-formed fingerprint, and any key that is not a normalized
/// relative path is rejected as a whole.
pub fn from_json(content: &str) -> ManifestResult<Manifest> {
    let file: ManifestFile =
        serde_json::from_str(content).map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;

    if file.format_version != Manifest::FORMAT_VERSION {
        return Err(ManifestError::UnsupportedVersion {
            found: file.format_version,
            expected: Manifest::FORMAT_VERSION.to_string(),
        });
    }

    let mut entries = BTreeMap::new();
    for (path, digest) in file.entries {
        if !is_contained_logical_path(&path) {
            return Err(ManifestError::InvalidFormat(format!(
                "entry '{}' is not a path below the install root",
                path
            )));
        }
        let fingerprint = Fingerprint::new(digest);
        if !fingerprint.is_well_formed() {
            return Err(ManifestError::InvalidFormat(format!(
                "entry '{}' has a malformed fingerprint",
                path
            )));
        }
        entries.insert(path, fingerprint);
    }

    // A bad timestamp only loses the timestamp
    let installed_at = file
        .installed_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|at| at.with_timezone(&Utc));

    Ok(Manifest::from_parts(file.format_version, installed_at, entries))
}

impl<F: FileSystem> ManifestRepository for JsonManifestRepository<F> {
    fn load(&self, path: &Path) -> ManifestResult<Option<Manifest>> {
        let bytes = match self.fs.read(path) {
            Ok(bytes) => bytes,
            Err(FsError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(ManifestError::Io(e.into_io())),
        };
        let content = String::from_utf8(bytes)
            .map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;
        from_json(&content).map(Some)
    }

    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()> {
        let mut content = to_json(manifest)?;
        content.push('\n');
        self.fs
            .write(path, content.as_bytes())
            .map_err(|e| ManifestError::Io(e.into_io()))
    }
}
