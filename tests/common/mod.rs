//! Common test utilities for installer integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated package, home and project directories plus a CLI runner
//! - Assertion macros: `assert_installed!`, `assert_output_contains!`, etc.
//! - Fixtures: Reusable package content

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
