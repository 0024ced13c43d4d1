//! Package configuration
//!
//! The package layout (source roots, extension rules, exclusions) comes from:
//! 1. `install.toml` in the package root, when present
//! 2. Built-in defaults matching the mindsystem package

mod loader;
mod types;

pub use loader::{load_layout, package_version, parse_layout, ConfigWarning, PACKAGE_CONFIG_FILE};
pub use types::{
    ExcludeConfig, FileRules, PackageLayout, SourceRoot, MANIFEST_PATH, VERSION_PATH,
};
