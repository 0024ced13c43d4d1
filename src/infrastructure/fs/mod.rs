//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the tree walker
//! used to collect sources and the pruning pass used after orphan removal.

mod home;
mod local;
mod memory;
mod walk;

pub use home::{expand_tilde, home_dir, TEST_HOME_VAR};
pub use local::{atomic_write, LocalFs};
pub use memory::MemoryFs;
pub use walk::{prune_empty_dirs, TreeWalker, WalkedFile};
