//! tree::traits
//!
//! Tree trait definition.
//!
//! # Design
//!
//! The `Tree` trait is a minimal whole-document interface: `read_lines`
//! returns every line of a file (each keeping its terminator; the final line
//! may lack one), and `write_lines` replaces the file's entire content.
//! There is no streaming, no locking, and no atomicity guarantee; callers
//! that need those must provide them around the tree.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from tree operations.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The file does not exist.
    #[error("no such file: {path}")]
    NotFound {
        /// The path that was requested
        path: PathBuf,
    },

    /// Failed to read the file.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the file.
    #[error("failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file content is not valid UTF-8.
    #[error("file is not valid UTF-8: {path}")]
    Decode {
        /// The offending path
        path: PathBuf,
    },
}

/// Whole-document file access.
///
/// Paths are interpreted relative to whatever root the implementation was
/// constructed with.
pub trait Tree {
    /// Read a file as an ordered sequence of lines.
    ///
    /// Each line keeps its terminator; the final line may lack one. An empty
    /// file yields an empty sequence.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, TreeError>;

    /// Overwrite a file's entire content.
    ///
    /// The write is not atomic.
    fn write_lines(&mut self, path: &Path, content: &str) -> Result<(), TreeError>;
}

/// Split text into lines, each keeping its `\n` terminator.
pub(crate) fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_terminators() {
        assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
    }

    #[test]
    fn final_line_may_lack_terminator() {
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
    }

    #[test]
    fn empty_content_yields_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn blank_lines_survive() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a\n", "\n", "b\n"]);
    }
}
