//! Install scope value object - defines where assets are installed
//!
//! - `Global` scope: the Claude config directory (default `~/.claude`)
//! - `Local` scope: `./.claude` in the current working directory

use std::fmt;

/// Where an install lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InstallScope {
    /// User-level install into the Claude config directory
    #[default]
    Global,
    /// Project-level install into `./.claude`
    Local,
}

impl InstallScope {
    pub fn is_global(&self) -> bool {
        matches!(self, InstallScope::Global)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, InstallScope::Local)
    }
}

impl fmt::Display for InstallScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallScope::Global => write!(f, "global"),
            InstallScope::Local => write!(f, "local"),
        }
    }
}
