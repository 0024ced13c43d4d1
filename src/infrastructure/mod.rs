//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory), tree walking, pruning
//! - `repositories/` - Manifest persistence (JSON)
//! - `conflict/` - Interactive conflict prompt
//! - `source/` - Package source collection
//! - `probe` - Python runtime probe

pub mod conflict;
pub mod fs;
pub mod probe;
pub mod repositories;
pub mod source;

// Re-export for convenience
pub use conflict::InteractivePrompt;
pub use fs::{LocalFs, MemoryFs};
pub use repositories::JsonManifestRepository;
pub use source::SourceCollector;
