//! tree::memory
//!
//! In-memory tree for deterministic testing.
//!
//! # Design
//!
//! `MemoryTree` stores file content in a `HashMap` and implements the same
//! [`Tree`] trait as the filesystem tree, so unit and integration tests can
//! exercise the news operations without touching disk.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use newsworthy::tree::{MemoryTree, Tree};
//!
//! let mut tree = MemoryTree::new();
//! tree.insert("NEWS", "1.2.3\tUNRELEASED\n");
//!
//! let lines = tree.read_lines(Path::new("NEWS")).unwrap();
//! assert_eq!(lines, vec!["1.2.3\tUNRELEASED\n"]);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::traits::{split_lines, Tree, TreeError};

/// In-memory tree for testing.
#[derive(Debug, Default, Clone)]
pub struct MemoryTree {
    /// File content by path.
    files: HashMap<PathBuf, String>,
}

impl MemoryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with the given content.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// The current content of a file, if present.
    pub fn content(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl Tree for MemoryTree {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, TreeError> {
        let content = self.files.get(path).ok_or_else(|| TreeError::NotFound {
            path: path.to_path_buf(),
        })?;
        Ok(split_lines(content))
    }

    fn write_lines(&mut self, path: &Path, content: &str) -> Result<(), TreeError> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
