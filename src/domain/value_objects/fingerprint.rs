//! Content Fingerprint Value Object
//!
//! A validated, immutable digest of a file's post-transform content.
//! Used for change detection in the manifest.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content fingerprint value object
///
/// Wraps a lowercase hex SHA-256 digest. Two equal fingerprints mean the
/// content is considered identical for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of a full SHA-256 hex digest
    pub const HEX_LEN: usize = 64;

    /// Wrap an existing fingerprint string (as stored in a manifest).
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Compute the fingerprint of raw bytes.
    ///
    /// This is the bare digest; callers that handle text assets go through
    /// `Fingerprinter`, which applies the content transform first.
    pub fn of(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self(format!("{:x}", digest))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this looks like a full SHA-256 hex digest.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == Self::HEX_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    /// Short form for display (first 12 hex chars)
    pub fn short(&self) -> &str {
        let end = self.0.len().min(12);
        &self.0[..end]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Fingerprint {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Fingerprint {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
