//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InstallUseCase` - collect, reconcile, resolve, apply, record

pub mod install;

pub use install::{CategoryReport, InstallOptions, InstallReport, InstallUseCase};
