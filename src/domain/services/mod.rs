//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! Anything that must look at files does so through the `FileSystem` port.

mod fingerprinter;
mod reconciler;
mod resolver;

pub use fingerprinter::Fingerprinter;
pub use reconciler::{
    classify, Disposition, LiveState, PlannedInstall, ReconcilePlan, Reconciler,
};
pub use resolver::{ConflictResolver, Resolution, ResolutionMode};
