//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Turning arguments and environment into `InstallOptions`
//! - Creating the use case with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use mindsystem_install::presentation::{factory, Cli};
//!
//! let env = factory::InstallEnv::from_process()?;
//! let options = factory::build_options(&cli, &env, InstallScope::Global)?;
//! let report = factory::create_install_use_case().execute(&options, &mut prompt)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::Cli;
pub use factory::{build_options, create_install_use_case, InstallEnv};
