//! Error types for the installer
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for installer operations
pub type InstallResult<T> = Result<T, InstallError>;

/// Main error type for installer operations
#[derive(Error, Debug)]
pub enum InstallError {
    /// Generic IO error without path context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A destination file could not be read while reconciling
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A destination file could not be written
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two source roots produced the same logical destination path
    #[error("'{path}' is produced by both {first} and {second}")]
    SourceCollision {
        path: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A source file maps onto a path reserved for install metadata
    #[error("'{path}' is reserved for install metadata")]
    ReservedPath { path: String },

    /// Package root (or a required source root) does not exist
    #[error("source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// `install.toml` could not be parsed
    #[error("invalid package config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid combination of options
    #[error("{0}")]
    Config(String),

    /// Home directory could not be determined
    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    /// The manifest could not be written
    #[error("failed to save manifest {path}: {message}")]
    ManifestSave { path: PathBuf, message: String },

    /// Reading an interactive answer failed
    #[error("conflict prompt failed: {0}")]
    Prompt(String),
}

impl InstallError {
    /// Whether this error was raised before any destination file was touched.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            InstallError::SourceCollision { .. }
                | InstallError::ReservedPath { .. }
                | InstallError::SourceNotFound { .. }
                | InstallError::InvalidConfig { .. }
                | InstallError::Config(_)
                | InstallError::HomeDirUnavailable
        )
    }
}
