//! Manifest entity - records what the last install left on disk
//!
//! The manifest maps every managed logical path to the fingerprint the file
//! had immediately after the install that wrote (or kept) it. It's a pure data
//! structure - I/O is handled by `ManifestRepository`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::Fingerprint;

/// Install record for one destination root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Format version
    format_version: String,
    /// When the install that produced this manifest finished
    installed_at: Option<DateTime<Utc>>,
    /// Map of logical paths to post-install fingerprints
    entries: BTreeMap<String, Fingerprint>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

impl Manifest {
    /// Format version written by this build
    pub const FORMAT_VERSION: &'static str = "1";

    /// Create a new empty manifest
    pub fn new() -> Self {
        Self {
            format_version: Self::FORMAT_VERSION.to_string(),
            installed_at: None,
            entries: BTreeMap::new(),
        }
    }

    /// Build a manifest from parts (used by repositories)
    pub fn from_parts(
        format_version: impl Into<String>,
        installed_at: Option<DateTime<Utc>>,
        entries: BTreeMap<String, Fingerprint>,
    ) -> Self {
        Self {
            format_version: format_version.into(),
            installed_at,
            entries,
        }
    }

    /// Stamp the install time
    pub fn with_installed_at(mut self, at: DateTime<Utc>) -> Self {
        self.installed_at = Some(at);
        self
    }

    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    pub fn installed_at(&self) -> Option<DateTime<Utc>> {
        self.installed_at
    }

    /// Check if the manifest is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Recorded fingerprint for a logical path
    pub fn get(&self, logical_path: &str) -> Option<&Fingerprint> {
        self.entries.get(logical_path)
    }

    /// Check if a path is tracked
    pub fn contains(&self, logical_path: &str) -> bool {
        self.entries.contains_key(logical_path)
    }

    /// Record a fingerprint
    pub fn set(&mut self, logical_path: impl Into<String>, fingerprint: impl Into<Fingerprint>) {
        self.entries.insert(logical_path.into(), fingerprint.into());
    }

    /// Remove an entry
    pub fn remove(&mut self, logical_path: &str) -> Option<Fingerprint> {
        self.entries.remove(logical_path)
    }

    /// All tracked paths, sorted
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// All entries, sorted by path
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Fingerprint)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries as a map (for comparisons in tests and reports)
    pub fn entry_map(&self) -> &BTreeMap<String, Fingerprint> {
        &self.entries
    }
}

impl FromIterator<(String, Fingerprint)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, Fingerprint)>>(iter: I) -> Self {
        Self::from_parts(Self::FORMAT_VERSION, None, iter.into_iter().collect())
    }
}
