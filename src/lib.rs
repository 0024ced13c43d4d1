//! mindsystem-install - manifest-aware installer for Mindsystem assets
//!
//! Installs the package's commands, agents, shared assets and helper scripts
//! into a Claude config directory, recording a content fingerprint for every
//! file it writes. On re-install the recorded fingerprints tell upstream
//! updates apart from local edits, so edits are never silently lost and files
//! dropped upstream are cleaned up.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CategoryReport, InstallOptions, InstallReport, InstallUseCase};
pub use config::PackageLayout;
pub use domain::entities::{Conflict, InstallableItem, Manifest};
pub use domain::services::ResolutionMode;
pub use domain::value_objects::{Fingerprint, InstallScope};
pub use error::{InstallError, InstallResult};
