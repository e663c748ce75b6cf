//! tree::fs_tree
//!
//! Filesystem-backed tree.

use std::fs;
use std::path::{Path, PathBuf};

use super::traits::{split_lines, Tree, TreeError};

/// A tree rooted at a project directory.
///
/// All paths passed to the trait methods are resolved relative to the root.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use newsworthy::tree::{FsTree, Tree};
///
/// let tree = FsTree::new("/path/to/project");
/// let lines = tree.read_lines(Path::new("NEWS"))?;
/// # Ok::<(), newsworthy::tree::TreeError>(())
/// ```
#[derive(Debug)]
pub struct FsTree {
    /// Project root directory.
    root: PathBuf,
}

impl FsTree {
    /// Create a tree rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Tree for FsTree {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, TreeError> {
        let full = self.resolve(path);
        let bytes = fs::read(&full).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                TreeError::NotFound { path: full.clone() }
            } else {
                TreeError::ReadError {
                    path: full.clone(),
                    source,
                }
            }
        })?;
        let content =
            String::from_utf8(bytes).map_err(|_| TreeError::Decode { path: full })?;
        Ok(split_lines(&content))
    }

    fn write_lines(&mut self, path: &Path, content: &str) -> Result<(), TreeError> {
        let full = self.resolve(path);
        fs::write(&full, content).map_err(|source| TreeError::WriteError {
            path: full,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut tree = FsTree::new(dir.path());
        tree.write_lines(Path::new("NEWS"), "1.2.3\tUNRELEASED\n\n").unwrap();
        let lines = tree.read_lines(Path::new("NEWS")).unwrap();
        assert_eq!(lines, vec!["1.2.3\tUNRELEASED\n", "\n"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let tree = FsTree::new(dir.path());
        assert!(matches!(
            tree.read_lines(Path::new("NEWS")),
            Err(TreeError::NotFound { .. })
        ));
    }

    #[test]
    fn non_utf8_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("NEWS"), [0xff, 0xfe, 0x00]).unwrap();
        let tree = FsTree::new(dir.path());
        assert!(matches!(
            tree.read_lines(Path::new("NEWS")),
            Err(TreeError::Decode { .. })
        ));
    }
}
