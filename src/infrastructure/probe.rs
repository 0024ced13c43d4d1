//! Python runtime probe for the bundled lookup CLI.
//!
//! Purely advisory: every outcome is reported, none fails the install.

use std::process::Command;

/// Minimum supported Python version
pub const MIN_PYTHON: (u32, u32) = (3, 9);

/// Result of probing for Python
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PythonStatus {
    /// `python3` could not be run, or its output had no version
    Missing,
    /// Found, but older than [`MIN_PYTHON`]
    TooOld { major: u32, minor: u32 },
    /// Found and recent enough
    Supported { major: u32, minor: u32 },
}

impl PythonStatus {
    pub fn from_version(version: Option<(u32, u32)>) -> Self {
        match version {
            None => PythonStatus::Missing,
            Some((major, minor)) if (major, minor) < MIN_PYTHON => {
                PythonStatus::TooOld { major, minor }
            }
            Some((major, minor)) => PythonStatus::Supported { major, minor },
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, PythonStatus::Supported { .. })
    }
}

/// Extract `major.minor` from `python3 --version` output ("Python 3.12.1").
pub fn parse_python_version(output: &str) -> Option<(u32, u32)> {
    output.split_whitespace().find_map(|word| {
        let mut parts = word.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some((major, minor))
    })
}

/// Something that can report the available Python version.
pub trait RuntimeProbe {
    fn python(&self) -> PythonStatus;
}

/// Runs `python3 --version` on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl RuntimeProbe for SystemProbe {
    fn python(&self) -> PythonStatus {
        let output = match Command::new("python3").arg("--version").output() {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                tracing::debug!(status = ?output.status, "python3 --version failed");
                return PythonStatus::Missing;
            }
            Err(e) => {
                tracing::debug!(error = %e, "python3 not runnable");
                return PythonStatus::Missing;
            }
        };

        // Python 2 and early 3.x print the version on stderr
        let text = format!(
            "{} {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        PythonStatus::from_version(parse_python_version(&text))
    }
}

/// Probe that always reports the same status.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub PythonStatus);

impl RuntimeProbe for FixedProbe {
    fn python(&self) -> PythonStatus {
        self.0
    }
}
