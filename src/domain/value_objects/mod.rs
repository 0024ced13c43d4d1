//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exclusions;
mod fingerprint;
mod scope;
mod transform;

pub use exclusions::{
    ExclusionError, ExclusionRules, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES,
};
pub use fingerprint::Fingerprint;
pub use scope::InstallScope;
pub use transform::{ContentTransform, LOCAL_ROOT_EXPR, ROOT_PLACEHOLDER};
