//! tree
//!
//! The single doorway to NEWS file content.
//!
//! All file access in Newsworthy flows through the [`Tree`] trait: one call
//! reads the whole document as lines, one call writes the whole document
//! back. The [`news`](crate::news) operations never touch the filesystem
//! directly, which keeps them testable against the in-memory
//! [`MemoryTree`].
//!
//! # Implementations
//!
//! - [`FsTree`] - reads and writes files under a project root directory
//! - [`MemoryTree`] - deterministic in-memory double for tests

pub mod fs_tree;
pub mod memory;
pub mod traits;

pub use fs_tree::FsTree;
pub use memory::MemoryTree;
pub use traits::{Tree, TreeError};
