//! Install Module
//!
//! ## Structure
//!
//! - `options` - `InstallOptions`, built once per run
//! - `result` - `InstallReport` and per-category counts
//! - `applier` - executes a resolved plan against the destination
//! - `use_case` - the end-to-end install flow (`InstallUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use mindsystem_install::application::install::{InstallOptions, InstallUseCase};
//!
//! let use_case = InstallUseCase::new(LocalFs::new(), JsonManifestRepository::new(), SystemProbe);
//! let report = use_case.execute(&InstallOptions::new(package, dest), &mut prompt)?;
//! ```

mod applier;
mod options;
mod result;
mod use_case;

pub use applier::{ApplyOutcome, Applier};
pub use options::InstallOptions;
pub use result::{CategoryReport, InstallReport};
pub use use_case::{InstallUseCase, LOOKUP_CLI_PATH};
