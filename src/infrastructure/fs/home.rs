//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on some platforms, so tests point the
//! installer at a scratch home through `MINDSYSTEM_TEST_HOME` instead.
//!
//! Everything that resolves `~` for a functional path (the default install
//! root, `~/` in `CLAUDE_CONFIG_DIR` or `--config-dir`) goes through
//! [`home_dir`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable for test isolation of the home directory.
pub const TEST_HOME_VAR: &str = "MINDSYSTEM_TEST_HOME";

/// Home directory for installer paths.
///
/// Returns `None` when neither `MINDSYSTEM_TEST_HOME` is set nor the system
/// home can be resolved.
pub fn home_dir() -> Option<PathBuf> {
    resolve_home(std::env::var_os(TEST_HOME_VAR))
}

fn resolve_home(override_home: Option<OsString>) -> Option<PathBuf> {
    override_home
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` or `~/` against `home`.
///
/// Other paths, including `~user/...`, are returned unchanged.
pub fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    if raw == "~" {
        home.to_path_buf()
    } else if let Some(rest) = raw.strip_prefix("~/") {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}
