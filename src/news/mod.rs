//! news
//!
//! Changelog entry operations.
//!
//! # Overview
//!
//! These operations read the NEWS file through a [`Tree`], inspect the
//! *leading* version entry only, and (for the mutating operations) write the
//! whole document back in a single call:
//!
//! - [`pending_status`] - classify the leading entry as pending or released
//! - [`find_pending`] - the pending entry's version, or an error
//! - [`mark_released`] - stamp version + date, return the release notes
//! - [`add_pending`] - open a fresh pending entry ahead of the current one
//! - [`validate`] - check the leading entry parses at all
//!
//! Every operation reads the document fresh; nothing is cached between
//! calls. Writes happen only after all preconditions have passed, so a
//! failed operation never leaves a partially mutated file behind.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::header::{skip_header, HeaderError, LineFormat, VersionLine, UNRELEASED};
use crate::tree::{Tree, TreeError};

/// Errors from changelog entry operations.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The leading entry is already released.
    ///
    /// This is the expected outcome for a freshly released project; callers
    /// that only probe for pending changes treat it as benign.
    #[error("no unreleased changes")]
    NoUnreleasedChanges,

    /// A pending entry already exists; a second one must not be stacked on
    /// top of it.
    #[error("pending entry {version} ({}) already exists", .date.as_deref().unwrap_or("no date"))]
    PendingExists {
        /// Version of the existing pending entry
        version: String,
        /// Date field of the existing pending entry, if it has one
        date: Option<String>,
    },

    /// The caller's asserted version does not match the document.
    ///
    /// This is a caller invariant violation, not an expected runtime
    /// condition.
    #[error("unexpected version: {found} != {expected}")]
    VersionMismatch {
        /// The version the caller asserted
        expected: String,
        /// The version actually found in the document
        found: String,
    },

    /// The document ended before any version entry.
    #[error("no version entry found")]
    MissingVersionEntry,

    /// The leading version line did not parse.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// File access failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Status of the leading version entry.
///
/// The pending/released distinction is derived from the parsed header each
/// time; a document's leading entry is always exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingStatus {
    /// The leading entry awaits release; carries its version.
    Pending(String),
    /// The leading entry has been released.
    Released,
}

/// Parse the leading version entry of the document.
///
/// Returns the line index of the header together with the parsed header.
fn leading_entry(lines: &[String]) -> Result<(usize, VersionLine), NewsError> {
    let i = skip_header(lines);
    let line = lines.get(i).ok_or(NewsError::MissingVersionEntry)?;
    Ok((i, VersionLine::parse(line)?))
}

/// Classify the leading entry as pending or released.
pub fn pending_status(tree: &dyn Tree, path: &Path) -> Result<PendingStatus, NewsError> {
    let lines = tree.read_lines(path)?;
    let (_, header) = leading_entry(&lines)?;
    if header.pending {
        Ok(PendingStatus::Pending(header.version))
    } else {
        Ok(PendingStatus::Released)
    }
}

/// The version of the pending leading entry.
///
/// # Errors
///
/// Returns [`NewsError::NoUnreleasedChanges`] if the leading entry is
/// already released.
pub fn find_pending(tree: &dyn Tree, path: &Path) -> Result<String, NewsError> {
    match pending_status(tree, path)? {
        PendingStatus::Pending(version) => Ok(version),
        PendingStatus::Released => Err(NewsError::NoUnreleasedChanges),
    }
}

/// Check that the NEWS file has a well-formed leading entry.
///
/// Both pending and released entries validate; only parse and I/O failures
/// propagate.
pub fn validate(tree: &dyn Tree, path: &Path) -> Result<(), NewsError> {
    pending_status(tree, path).map(|_| ())
}

/// Mark the pending leading entry as released.
///
/// Rewrites the header line with `expected_version` and `release_date`
/// (rendered `YYYY-MM-DD`) in the line's original shape, leaving every other
/// line untouched, and returns the entry's change block: the contiguous run
/// of blank or indented lines after the header, verbatim.
///
/// # Errors
///
/// - [`NewsError::NoUnreleasedChanges`] if the leading entry is released
/// - [`NewsError::VersionMismatch`] if the document's version is not
///   `expected_version`
pub fn mark_released(
    tree: &mut dyn Tree,
    path: &Path,
    expected_version: &str,
    release_date: NaiveDate,
) -> Result<String, NewsError> {
    let mut lines = tree.read_lines(path)?;
    let (i, header) = leading_entry(&lines)?;
    if !header.pending {
        return Err(NewsError::NoUnreleasedChanges);
    }
    if header.version != expected_version {
        return Err(NewsError::VersionMismatch {
            expected: expected_version.to_string(),
            found: header.version,
        });
    }

    let notes: String = lines[i + 1..]
        .iter()
        .take_while(|line| is_change_line(line))
        .map(String::as_str)
        .collect();

    let date = release_date.format("%Y-%m-%d").to_string();
    lines[i] = format!("{}\n", header.render(&date));
    tree.write_lines(path, &lines.concat())?;
    Ok(notes)
}

/// Insert a fresh pending entry ahead of the current leading entry.
///
/// The new header always uses the plain `{version} {date}` shape with an
/// `UNRELEASED` date, followed by one blank line. The previous leading entry
/// becomes the second entry, untouched.
///
/// # Errors
///
/// Returns [`NewsError::PendingExists`] if the leading entry is already
/// pending.
pub fn add_pending(tree: &mut dyn Tree, path: &Path, new_version: &str) -> Result<(), NewsError> {
    let mut lines = tree.read_lines(path)?;
    let (i, header) = leading_entry(&lines)?;
    if header.pending {
        return Err(NewsError::PendingExists {
            version: header.version,
            date: header.date,
        });
    }

    lines.insert(i, "\n".to_string());
    lines.insert(
        i,
        format!("{}\n", LineFormat::VersionSpace.render(new_version, UNRELEASED)),
    );
    tree.write_lines(path, &lines.concat())?;
    Ok(())
}

/// Whether a line belongs to the change block of the entry above it.
fn is_change_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(' ') || line.starts_with('\t')
}

/// A NEWS file bound to a tree and path.
///
/// Convenience handle offering the module's operations as methods.
///
/// # Example
///
/// ```
/// use newsworthy::news::NewsFile;
/// use newsworthy::tree::MemoryTree;
///
/// let mut tree = MemoryTree::new();
/// tree.insert("NEWS", "1.2.3\tUNRELEASED\n  Fixed bug.\n");
///
/// let mut news = NewsFile::new(&mut tree, "NEWS");
/// assert_eq!(news.find_pending().unwrap(), "1.2.3");
/// ```
pub struct NewsFile<'a> {
    tree: &'a mut dyn Tree,
    path: PathBuf,
}

impl<'a> NewsFile<'a> {
    /// Bind a NEWS file at `path` within `tree`.
    pub fn new(tree: &'a mut dyn Tree, path: impl Into<PathBuf>) -> Self {
        Self {
            tree,
            path: path.into(),
        }
    }

    /// See [`pending_status`].
    pub fn pending_status(&self) -> Result<PendingStatus, NewsError> {
        pending_status(&*self.tree, &self.path)
    }

    /// See [`find_pending`].
    pub fn find_pending(&self) -> Result<String, NewsError> {
        find_pending(&*self.tree, &self.path)
    }

    /// See [`mark_released`].
    pub fn mark_released(
        &mut self,
        expected_version: &str,
        release_date: NaiveDate,
    ) -> Result<String, NewsError> {
        mark_released(self.tree, &self.path, expected_version, release_date)
    }

    /// See [`add_pending`].
    pub fn add_pending(&mut self, new_version: &str) -> Result<(), NewsError> {
        add_pending(self.tree, &self.path, new_version)
    }

    /// See [`validate`].
    pub fn validate(&self) -> Result<(), NewsError> {
        validate(&*self.tree, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MemoryTree;

    const PATH: &str = "NEWS";

    fn tree_with(content: &str) -> MemoryTree {
        let mut tree = MemoryTree::new();
        tree.insert(PATH, content);
        tree
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod find_pending {
        use super::*;

        #[test]
        fn returns_pending_version() {
            let tree = tree_with("1.2.3\tUNRELEASED\n  Fixed bug.\n\n");
            assert_eq!(find_pending(&tree, Path::new(PATH)).unwrap(), "1.2.3");
        }

        #[test]
        fn released_entry_is_an_error() {
            let tree = tree_with("1.2.3 2024-05-01\n");
            assert!(matches!(
                find_pending(&tree, Path::new(PATH)),
                Err(NewsError::NoUnreleasedChanges)
            ));
        }

        #[test]
        fn repeated_calls_agree() {
            let tree = tree_with("1.2.3\tUNRELEASED\n  Fixed bug.\n");
            let first = find_pending(&tree, Path::new(PATH)).unwrap();
            let second = find_pending(&tree, Path::new(PATH)).unwrap();
            assert_eq!(first, second);
        }

        #[test]
        fn skips_title_block() {
            let tree = tree_with(
                "Changelog for frobnicator\n\
                 =========================\n\
                 \n\
                 1.3.0\tUNRELEASED\n",
            );
            assert_eq!(find_pending(&tree, Path::new(PATH)).unwrap(), "1.3.0");
        }

        #[test]
        fn placeholder_version_counts_as_pending() {
            let tree = tree_with("%(version)s\tUNRELEASED\n");
            assert_eq!(find_pending(&tree, Path::new(PATH)).unwrap(), "%(version)s");
        }

        #[test]
        fn odd_version_propagates() {
            let tree = tree_with("banana\n");
            assert!(matches!(
                find_pending(&tree, Path::new(PATH)),
                Err(NewsError::Header(HeaderError::OddVersion(v))) if v == "banana"
            ));
        }

        #[test]
        fn empty_document_is_missing_entry() {
            let tree = tree_with("");
            assert!(matches!(
                find_pending(&tree, Path::new(PATH)),
                Err(NewsError::MissingVersionEntry)
            ));
        }
    }

    mod mark_released {
        use super::*;

        #[test]
        fn stamps_date_and_returns_notes() {
            let mut tree = tree_with("1.2.3\tUNRELEASED\n  Fixed bug.\n\n");
            let notes =
                mark_released(&mut tree, Path::new(PATH), "1.2.3", date(2024, 5, 1)).unwrap();
            assert_eq!(notes, "  Fixed bug.\n\n");
            assert_eq!(tree.content(PATH), Some("1.2.3\t2024-05-01\n  Fixed bug.\n\n"));
        }

        #[test]
        fn preserves_parenthesized_shape() {
            let mut tree = tree_with("1.2.3 (UNRELEASED)\n  Fixed bug.\n");
            mark_released(&mut tree, Path::new(PATH), "1.2.3", date(2024, 5, 1)).unwrap();
            assert_eq!(tree.content(PATH), Some("1.2.3 (2024-05-01)\n  Fixed bug.\n"));
        }

        #[test]
        fn notes_stop_at_next_entry() {
            let mut tree = tree_with(
                "1.3.0\tUNRELEASED\n\
                 \n\
                 \tNew flag.\n\
                 1.2.3\t2024-01-01\n\
                 \tOld fix.\n",
            );
            let notes =
                mark_released(&mut tree, Path::new(PATH), "1.3.0", date(2024, 5, 1)).unwrap();
            assert_eq!(notes, "\n\tNew flag.\n");
            assert_eq!(
                tree.content(PATH),
                Some("1.3.0\t2024-05-01\n\n\tNew flag.\n1.2.3\t2024-01-01\n\tOld fix.\n")
            );
        }

        #[test]
        fn never_changes_line_count() {
            let mut tree = tree_with("1.2.3\tUNRELEASED\n  Fixed bug.\n\n");
            let before = tree.read_lines(Path::new(PATH)).unwrap().len();
            mark_released(&mut tree, Path::new(PATH), "1.2.3", date(2024, 5, 1)).unwrap();
            let after = tree.read_lines(Path::new(PATH)).unwrap().len();
            assert_eq!(before, after);
        }

        #[test]
        fn released_entry_is_an_error() {
            let mut tree = tree_with("1.2.3 2024-05-01\n");
            assert!(matches!(
                mark_released(&mut tree, Path::new(PATH), "1.2.3", date(2024, 6, 1)),
                Err(NewsError::NoUnreleasedChanges)
            ));
        }

        #[test]
        fn version_mismatch_leaves_file_untouched() {
            let original = "1.2.3\tUNRELEASED\n  Fixed bug.\n";
            let mut tree = tree_with(original);
            let err =
                mark_released(&mut tree, Path::new(PATH), "2.0.0", date(2024, 5, 1)).unwrap_err();
            assert!(matches!(
                err,
                NewsError::VersionMismatch { ref expected, ref found }
                    if expected == "2.0.0" && found == "1.2.3"
            ));
            assert_eq!(tree.content(PATH), Some(original));
        }

        #[test]
        fn skips_title_block() {
            let mut tree = tree_with(
                "Changelog for frobnicator\n\
                 =========================\n\
                 \n\
                 1.3.0\tUNRELEASED\n\
                 \tNew flag.\n",
            );
            let notes =
                mark_released(&mut tree, Path::new(PATH), "1.3.0", date(2024, 5, 1)).unwrap();
            assert_eq!(notes, "\tNew flag.\n");
            assert_eq!(
                tree.content(PATH),
                Some(
                    "Changelog for frobnicator\n\
                     =========================\n\
                     \n\
                     1.3.0\t2024-05-01\n\
                     \tNew flag.\n"
                )
            );
        }
    }

    mod add_pending {
        use super::*;

        #[test]
        fn inserts_plain_header_and_blank_line() {
            let mut tree = tree_with("1.2.3 (2024-05-01)\n");
            add_pending(&mut tree, Path::new(PATH), "1.3.0").unwrap();
            assert_eq!(
                tree.content(PATH),
                Some("1.3.0 UNRELEASED\n\n1.2.3 (2024-05-01)\n")
            );
        }

        #[test]
        fn increases_line_count_by_two() {
            let mut tree = tree_with("1.2.3\t2024-05-01\n  Fixed bug.\n");
            let before = tree.read_lines(Path::new(PATH)).unwrap().len();
            add_pending(&mut tree, Path::new(PATH), "1.3.0").unwrap();
            let after = tree.read_lines(Path::new(PATH)).unwrap().len();
            assert_eq!(after, before + 2);
        }

        #[test]
        fn pending_entry_blocks_a_second() {
            let mut tree = tree_with("1.3.0 UNRELEASED\n");
            let err = add_pending(&mut tree, Path::new(PATH), "1.4.0").unwrap_err();
            assert!(matches!(
                err,
                NewsError::PendingExists { ref version, ref date }
                    if version == "1.3.0" && date.as_deref() == Some("UNRELEASED")
            ));
        }

        #[test]
        fn inserts_below_title_block() {
            let mut tree = tree_with(
                "Changelog for frobnicator\n\
                 =========================\n\
                 \n\
                 1.2.3\t2024-05-01\n",
            );
            add_pending(&mut tree, Path::new(PATH), "1.3.0").unwrap();
            assert_eq!(
                tree.content(PATH),
                Some(
                    "Changelog for frobnicator\n\
                     =========================\n\
                     \n\
                     1.3.0 UNRELEASED\n\
                     \n\
                     1.2.3\t2024-05-01\n"
                )
            );
        }
    }

    mod validate {
        use super::*;

        #[test]
        fn pending_document_validates() {
            let tree = tree_with("1.3.0 UNRELEASED\n");
            assert!(validate(&tree, Path::new(PATH)).is_ok());
        }

        #[test]
        fn released_document_validates() {
            let tree = tree_with("1.2.3 2024-05-01\n");
            assert!(validate(&tree, Path::new(PATH)).is_ok());
        }

        #[test]
        fn odd_version_still_fails() {
            let tree = tree_with("banana\n");
            assert!(validate(&tree, Path::new(PATH)).is_err());
        }

        #[test]
        fn missing_file_still_fails() {
            let tree = MemoryTree::new();
            assert!(matches!(
                validate(&tree, Path::new(PATH)),
                Err(NewsError::Tree(TreeError::NotFound { .. }))
            ));
        }
    }

    mod news_file_handle {
        use super::*;

        #[test]
        fn full_release_cycle() {
            let mut tree = tree_with("1.3.0\tUNRELEASED\n  Grew a flag.\n\n");
            let mut news = NewsFile::new(&mut tree, PATH);

            assert_eq!(news.find_pending().unwrap(), "1.3.0");
            let notes = news.mark_released("1.3.0", date(2024, 5, 1)).unwrap();
            assert_eq!(notes, "  Grew a flag.\n\n");
            assert!(matches!(
                news.find_pending(),
                Err(NewsError::NoUnreleasedChanges)
            ));

            news.add_pending("1.4.0").unwrap();
            assert_eq!(news.find_pending().unwrap(), "1.4.0");
            assert!(news.validate().is_ok());
        }
    }
}
