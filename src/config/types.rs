//! Package layout type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    ExclusionRules, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES,
};
use crate::error::{InstallError, InstallResult};

/// Reserved manifest location, relative to the destination root
pub const MANIFEST_PATH: &str = "mindsystem/.install-manifest.json";

/// Reserved version marker location, relative to the destination root
pub const VERSION_PATH: &str = "mindsystem/VERSION";

/// One source root and where it lands in the destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRoot {
    /// Directory (or single file) relative to the package root
    pub source: PathBuf,
    /// Logical destination prefix
    pub dest: String,
    /// Apply the placeholder transform to text files below this root
    #[serde(default)]
    pub transform: bool,
    /// Fail when the source is missing instead of skipping it
    #[serde(default)]
    pub required: bool,
    /// Name shown in the summary (defaults to `dest`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SourceRoot {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            transform: false,
            required: false,
            label: None,
        }
    }

    pub fn transformed(mut self) -> Self {
        self.transform = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.dest)
    }
}

/// Extension-based file classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRules {
    /// Text assets eligible for the placeholder transform
    pub text_extensions: Vec<String>,
    /// Scripts that receive mode 0755
    pub executable_extensions: Vec<String>,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            text_extensions: vec!["md".to_string()],
            executable_extensions: vec!["sh".to_string(), "bash".to_string(), "zsh".to_string()],
        }
    }
}

/// Directory-name and file-name exclusions for the collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// What the package contains and where each part is installed.
///
/// Loaded from `install.toml` when present; every table is optional and
/// replaces the corresponding built-in default as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageLayout {
    /// Package version written to the version marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub roots: Vec<SourceRoot>,
    pub files: FileRules,
    pub exclude: ExcludeConfig,
}

impl Default for PackageLayout {
    fn default() -> Self {
        Self {
            version: None,
            roots: vec![
                SourceRoot::new("commands/ms", "commands/ms")
                    .transformed()
                    .required(),
                SourceRoot::new("mindsystem", "mindsystem")
                    .transformed()
                    .required(),
                SourceRoot::new("agents", "agents").transformed(),
                SourceRoot::new("scripts", "mindsystem/scripts").labeled("scripts"),
                SourceRoot::new("CHANGELOG.md", "mindsystem/CHANGELOG.md").labeled("CHANGELOG.md"),
            ],
            files: FileRules::default(),
            exclude: ExcludeConfig::default(),
        }
    }
}

impl PackageLayout {
    /// Logical paths no source may produce.
    pub fn reserved_paths(&self) -> [&'static str; 2] {
        [MANIFEST_PATH, VERSION_PATH]
    }

    pub fn is_reserved(&self, logical_path: &str) -> bool {
        self.reserved_paths().contains(&logical_path)
    }

    /// The root whose destination prefix contains `logical_path` (longest match).
    pub fn root_for(&self, logical_path: &str) -> Option<&SourceRoot> {
        self.roots
            .iter()
            .filter(|root| {
                logical_path == root.dest
                    || logical_path
                        .strip_prefix(root.dest.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            })
            .max_by_key(|root| root.dest.len())
    }

    /// Whether a file is a text asset.
    pub fn is_text(&self, path: &Path) -> bool {
        has_extension(path, &self.files.text_extensions)
    }

    /// Whether a file should be made executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        has_extension(path, &self.files.executable_extensions)
    }

    /// Compile the exclusion patterns.
    pub fn exclusion_rules(&self) -> InstallResult<ExclusionRules> {
        ExclusionRules::new(&self.exclude.dirs, &self.exclude.files)
            .map_err(|e| InstallError::Config(e.to_string()))
    }

    /// Check that every root stays inside the package and the destination.
    pub fn validate(&self, file: &Path) -> InstallResult<()> {
        let invalid = |message: String| InstallError::InvalidConfig {
            file: file.to_path_buf(),
            message,
        };

        for root in &self.roots {
            if !is_contained(&root.source) {
                return Err(invalid(format!(
                    "root source '{}' must be a relative path inside the package",
                    root.source.display()
                )));
            }
            if root.dest.trim().is_empty() || !is_contained(Path::new(&root.dest)) {
                return Err(invalid(format!(
                    "root dest '{}' must be a non-empty relative path",
                    root.dest
                )));
            }
        }
        Ok(())
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

fn is_contained(path: &Path) -> bool {
    use std::path::Component;
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
