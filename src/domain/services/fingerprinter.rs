//! Content fingerprinting
//!
//! Digests are always taken over post-transform bytes, for source content and
//! for installed content alike, so a file installed without modification
//! fingerprints identically on both sides.

use std::borrow::Cow;

use crate::domain::value_objects::{ContentTransform, Fingerprint};

/// Applies the install transform, then digests.
#[derive(Debug, Clone)]
pub struct Fingerprinter {
    transform: ContentTransform,
}

impl Fingerprinter {
    pub fn new(transform: ContentTransform) -> Self {
        Self { transform }
    }

    pub fn transform(&self) -> &ContentTransform {
        &self.transform
    }

    /// Bytes as they will be (or were) written for an item.
    pub fn render<'a>(&self, content: &'a [u8], transformed: bool) -> Cow<'a, [u8]> {
        if transformed {
            self.transform.apply(content)
        } else {
            Cow::Borrowed(content)
        }
    }

    /// Fingerprint content, transforming first when the item is a text asset.
    pub fn fingerprint(&self, content: &[u8], transformed: bool) -> Fingerprint {
        Fingerprint::of(&self.render(content, transformed))
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new(ContentTransform::identity())
    }
}
