//! Exclusion rules for the source tree walk
//!
//! Two kinds of rules, both using gitignore glob semantics via the `ignore`
//! crate and matched against a single path component:
//! - directory patterns: the directory is pruned (never descended into)
//! - file patterns: the file is skipped individually

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::path::Path;

/// Directories that never belong in an install: build output, caches,
/// version-control metadata and virtual environments.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    ".tox",
    ".venv",
    "venv",
    "node_modules",
    "build",
    "dist",
    "target",
    "*.egg-info",
];

/// Test and spec files, plus editor/OS litter.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "test_*.py",
    "*_test.py",
    "conftest.py",
    "*.test.*",
    "*.spec.*",
    "*.pyc",
    ".DS_Store",
];

/// Compiled exclusion rules.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    dirs: Gitignore,
    files: Gitignore,
    dir_count: usize,
    file_count: usize,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExclusionRules {
    /// Build rules from directory-name and file-name glob patterns.
    pub fn new<D, F>(dir_patterns: D, file_patterns: F) -> Result<Self, ExclusionError>
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let (dirs, dir_count) = compile(dir_patterns)?;
        let (files, file_count) = compile(file_patterns)?;
        Ok(Self {
            dirs,
            files,
            dir_count,
            file_count,
        })
    }

    /// The built-in rule set.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES)
            .expect("built-in exclusion patterns are valid")
    }

    /// Rules that exclude nothing.
    pub fn none() -> Self {
        Self::new(std::iter::empty::<&str>(), std::iter::empty::<&str>())
            .expect("empty gitignore should always build")
    }

    /// Whether a directory with this name should be pruned.
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.matched(Path::new(name), true).is_ignore()
    }

    /// Whether a file with this name should be skipped.
    pub fn excludes_file(&self, name: &str) -> bool {
        self.files.matched(Path::new(name), false).is_ignore()
    }

    /// Dispatch on entry kind; `path` only contributes its final component.
    pub fn excludes(&self, path: &Path, is_dir: bool) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if is_dir {
            self.excludes_dir(name)
        } else {
            self.excludes_file(name)
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.dir_count + self.file_count
    }
}

fn compile<I>(patterns: I) -> Result<(Gitignore, usize), ExclusionError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut builder = GitignoreBuilder::new("");
    let mut count = 0;
    for pattern in patterns {
        let pattern = pattern.as_ref().trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            continue;
        }
        builder
            .add_line(None, pattern)
            .map_err(|e| ExclusionError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        count += 1;
    }
    let matcher = builder
        .build()
        .map_err(|e| ExclusionError::BuildFailed(e.to_string()))?;
    Ok((matcher, count))
}

/// Errors that can occur when compiling exclusion rules.
#[derive(Debug)]
pub enum ExclusionError {
    /// A pattern has invalid syntax.
    InvalidPattern { pattern: String, message: String },
    /// Failed to build the gitignore matcher.
    BuildFailed(String),
}

impl fmt::Display for ExclusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid exclusion pattern '{}' - {}", pattern, message)
            }
            Self::BuildFailed(msg) => write!(f, "failed to build exclusion matcher: {}", msg),
        }
    }
}

impl std::error::Error for ExclusionError {}
