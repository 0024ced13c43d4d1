//! Conflict entity - a file changed independently by the user and upstream

/// Why a path is in conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// The user edited the installed file and upstream changed it differently
    LocallyModified,
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictReason::LocallyModified => write!(f, "modified locally since last install"),
        }
    }
}

/// A path that needs a decision before the applier may touch it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub logical_path: String,
    pub reason: ConflictReason,
}

impl Conflict {
    pub fn locally_modified(logical_path: impl Into<String>) -> Self {
        Self {
            logical_path: logical_path.into(),
            reason: ConflictReason::LocallyModified,
        }
    }
}
