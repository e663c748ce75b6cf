//! core::header
//!
//! Version-line grammar and header skipping for NEWS files.
//!
//! # Format
//!
//! A NEWS file is an optional title block followed by version entries:
//!
//! ```text
//! Changelog for frobnicator
//! =========================
//!
//! 1.3.0\tUNRELEASED
//!
//!  * Grew a --frob flag.
//!
//! 1.2.3\t2024-05-01
//!
//!  * Fixed the widget.
//! ```
//!
//! A version line is one of four shapes: `1.2.3` alone, `1.2.3 2024-05-01`,
//! `1.2.3 (2024-05-01)`, or `1.2.3\t2024-05-01`. The shape is remembered as a
//! [`LineFormat`] so a rewritten line reproduces the original layout.
//!
//! # Pending classification
//!
//! An entry is *pending* (not yet released) when its version or date is the
//! `UNRELEASED` sentinel, or when the version is the `%(version)s`
//! placeholder found in template files. Status is derived from the line every
//! time; it is never stored.

use thiserror::Error;

/// Sentinel marking a version or date as not yet released.
pub const UNRELEASED: &str = "UNRELEASED";

/// Placeholder version used in template NEWS files before any release.
const VERSION_PLACEHOLDER: &str = "%(version)s";

/// Title prefix that introduces an optional header block.
const TITLE_PREFIX: &str = "Changelog for ";

/// Errors from version-line parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// The version token is neither a sentinel nor digits-and-dots.
    #[error("odd version string: {0}")]
    OddVersion(String),
}

/// The textual shape of a version line.
///
/// Remembering the shape lets [`VersionLine::render`] reproduce the original
/// separator and punctuation byte-for-byte when the fields change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `1.2.3` - version with no date.
    VersionOnly,
    /// `1.2.3 2024-05-01` - space-separated.
    VersionSpace,
    /// `1.2.3\t2024-05-01` - tab-separated.
    VersionTab,
    /// `1.2.3 (2024-05-01)` - parenthesized date.
    VersionParenDate,
}

impl LineFormat {
    /// Render a version line in this shape, without a trailing newline.
    ///
    /// `VersionOnly` has no date field, so the date is ignored for it.
    pub fn render(self, version: &str, date: &str) -> String {
        match self {
            LineFormat::VersionOnly => version.to_string(),
            LineFormat::VersionSpace => format!("{version} {date}"),
            LineFormat::VersionTab => format!("{version}\t{date}"),
            LineFormat::VersionParenDate => format!("{version} ({date})"),
        }
    }
}

/// A parsed version-entry header line.
///
/// # Example
///
/// ```
/// use newsworthy::core::header::{LineFormat, VersionLine};
///
/// let line = VersionLine::parse("1.2.3\tUNRELEASED\n").unwrap();
/// assert_eq!(line.version, "1.2.3");
/// assert_eq!(line.date.as_deref(), Some("UNRELEASED"));
/// assert_eq!(line.format, LineFormat::VersionTab);
/// assert!(line.pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
    /// The version token. Never empty.
    pub version: String,
    /// The release date token, when the line carries one. For the
    /// parenthesized shape this is the date *inside* the parentheses.
    pub date: Option<String>,
    /// The shape of the original line.
    pub format: LineFormat,
    /// Whether this entry is still pending release.
    pub pending: bool,
}

impl VersionLine {
    /// Parse one line of text into a version header.
    ///
    /// Surrounding whitespace (including the trailing newline) is ignored.
    /// Tokenizing tries, in order: split on the first TAB, split on the first
    /// SPACE, else the whole line is the version.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::OddVersion`] if the version token is neither a
    /// recognized sentinel nor composed of digits and dots.
    pub fn parse(line: &str) -> Result<Self, HeaderError> {
        let line = line.trim();

        if let Some((version, date)) = line.split_once('\t') {
            let pending = version_is_pending(version)? || date == UNRELEASED;
            return Ok(Self {
                version: version.to_string(),
                date: Some(date.to_string()),
                format: LineFormat::VersionTab,
                pending,
            });
        }

        if let Some((version, date)) = line.split_once(' ') {
            // Parentheses are stripped only when the date is actually
            // wrapped; the pending check runs on the stored date.
            let (date, format) = match date
                .strip_prefix('(')
                .and_then(|d| d.strip_suffix(')'))
            {
                Some(inner) => (inner, LineFormat::VersionParenDate),
                None => (date, LineFormat::VersionSpace),
            };
            let pending = version_is_pending(version)? || date == UNRELEASED;
            return Ok(Self {
                version: version.to_string(),
                date: Some(date.to_string()),
                format,
                pending,
            });
        }

        let pending = version_is_pending(line)?;
        Ok(Self {
            version: line.to_string(),
            date: None,
            format: LineFormat::VersionOnly,
            pending,
        })
    }

    /// Render this header with its original shape, substituting `date` for
    /// the date field. No trailing newline is added.
    pub fn render(&self, date: &str) -> String {
        self.format.render(&self.version, date)
    }
}

/// Classify a version token.
///
/// Returns `true` for the pending sentinels (`UNRELEASED`, `%(version)s`),
/// `false` for a digits-and-dots version, and an error for anything else.
fn version_is_pending(version: &str) -> Result<bool, HeaderError> {
    if version == UNRELEASED || version == VERSION_PLACEHOLDER {
        return Ok(true);
    }
    if !version.is_empty() && version.chars().all(|c| c.is_ascii_digit() || c == '.') {
        Ok(false)
    } else {
        Err(HeaderError::OddVersion(version.to_string()))
    }
}

/// Locate the first version-entry line, skipping an optional title block.
///
/// If line 0 starts with `"Changelog for "` it is a title: skip it, skip a
/// following `======` underline if present, then skip blank lines. Otherwise
/// the document starts directly with a version entry and the index is 0.
///
/// The returned index may equal `lines.len()` for a document that is all
/// header; callers treat that as a missing version entry.
pub fn skip_header(lines: &[String]) -> usize {
    if !lines
        .first()
        .is_some_and(|line| line.starts_with(TITLE_PREFIX))
    {
        return 0;
    }
    let mut i = 1;
    if lines.get(i).is_some_and(|line| line.starts_with("======")) {
        i += 1;
    }
    while lines.get(i).is_some_and(|line| line.trim().is_empty()) {
        i += 1;
    }
    i
}
