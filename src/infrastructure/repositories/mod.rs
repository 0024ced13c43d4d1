//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod manifest;

pub use manifest::{from_json, to_json, JsonManifestRepository};
