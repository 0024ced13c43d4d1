//! Package layout loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InstallError, InstallResult};

use super::types::PackageLayout;

/// Optional layout override, looked up in the package root
pub const PACKAGE_CONFIG_FILE: &str = "install.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load the layout for `package_root`.
///
/// Without an `install.toml` the built-in layout is returned with no warnings.
pub fn load_layout(package_root: &Path) -> InstallResult<(PackageLayout, Vec<ConfigWarning>)> {
    let path = package_root.join(PACKAGE_CONFIG_FILE);
    if !path.is_file() {
        return Ok((PackageLayout::default(), Vec::new()));
    }

    let content = fs::read_to_string(&path).map_err(|e| InstallError::ReadFailed {
        path: path.clone(),
        source: e,
    })?;
    parse_layout(&content, &path)
}

/// Parse layout TOML, collecting unknown keys as warnings.
pub fn parse_layout(
    content: &str,
    file: &Path,
) -> InstallResult<(PackageLayout, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let layout: PackageLayout = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InstallError::InvalidConfig {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    layout.validate(file)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: file.to_path_buf(),
            }
        })
        .collect();

    Ok((layout, warnings))
}

/// Version written to the version marker.
///
/// `install.toml` wins, then `package.json`'s `version`, then this crate's
/// own version.
pub fn package_version(package_root: &Path, layout: &PackageLayout) -> String {
    if let Some(version) = layout.version.as_deref().filter(|v| !v.trim().is_empty()) {
        return version.trim().to_string();
    }

    let package_json = package_root.join("package.json");
    let from_json = fs::read_to_string(&package_json)
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
        .and_then(|value| value.get("version")?.as_str().map(str::to_string));

    match from_json {
        Some(version) => version,
        None => {
            tracing::debug!(path = %package_json.display(), "no package version found, using crate version");
            env!("CARGO_PKG_VERSION").to_string()
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "version",
        "roots",
        "source",
        "dest",
        "transform",
        "required",
        "label",
        "files",
        "text_extensions",
        "executable_extensions",
        "exclude",
        "dirs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
