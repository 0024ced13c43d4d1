//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `InstallableItem` - a file the current source tree wants installed
//! - `Manifest` - what the previous install left on disk
//! - `Conflict` - a path changed by both the user and upstream

mod conflict;
mod item;
mod manifest;

pub use conflict::{Conflict, ConflictReason};
pub use item::{
    destination_path, is_contained_logical_path, normalize_logical_path, InstallableItem,
};
pub use manifest::Manifest;
