//! Custom assertion macros for integration and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a file was installed under the global destination.
///
/// # Example
/// ```ignore
/// assert_installed!(env, "commands/ms/help.md");
/// ```
#[macro_export]
macro_rules! assert_installed {
    ($env:expr, $path:expr) => {
        let full_path = $env.global_path($path);
        assert!(
            full_path.is_file(),
            "Expected file at '{}', but it doesn't exist.\n\
             Destination: {:?}\n\
             Files found:\n  {}",
            $path,
            $env.global_root(),
            $crate::common::list_all_files(&$env.global_root()).join("\n  ")
        );
    };
}

/// Assert that a path does NOT exist under the global destination.
#[macro_export]
macro_rules! assert_not_installed {
    ($env:expr, $path:expr) => {
        let full_path = $env.global_path($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.\n\
             Destination: {:?}",
            $path,
            $env.global_root()
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Install Complete");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command succeeded, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}\nstdout:\n{}\nstderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}
