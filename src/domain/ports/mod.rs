//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod conflict_prompt;
pub mod file_system;
pub mod manifest_repository;

pub use conflict_prompt::{ConflictContext, ConflictPrompt, PromptAnswer, ScriptedPrompt};
pub use file_system::{FileSystem, FsError, FsResult};
pub use manifest_repository::{
    LoadedManifest, ManifestError, ManifestRepository, ManifestResult,
};
