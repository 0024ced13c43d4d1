//! Domain Layer
//!
//! The installer's core: what an install item is, what the manifest records,
//! and how the two are reconciled against the destination.
//!
//! ## Structure
//!
//! - `entities/` - InstallableItem, Manifest, Conflict
//! - `value_objects/` - Fingerprint, InstallScope, ContentTransform, ExclusionRules
//! - `services/` - Fingerprinter, Reconciler, ConflictResolver
//! - `ports/` - FileSystem, ManifestRepository, ConflictPrompt
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - files are reached only through the `FileSystem` port
//! 2. **Plans, not actions** - services return plans; the application layer applies them
//! 3. **Ports & Adapters** - concrete implementations live in `infrastructure/`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
