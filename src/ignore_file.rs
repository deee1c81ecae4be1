#![forbid(unsafe_code)]

//! `.eslintignore` reading
//!
//! The ignore file is newline-delimited. Each line is trimmed of whitespace
//! and byte-order marks; blank lines and lines starting with `//` or `#` are
//! dropped. The remaining lines are returned in file order.

use crate::error::IgnoreFileError;
use ignore::Match;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the ignore file looked up in the working directory
pub const ESLINT_IGNORE_FILE: &str = ".eslintignore";

const COMMENT_MARKERS: [&str; 2] = ["//", "#"];

/// Read `.eslintignore` from the current working directory
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns `IgnoreFileError::Read` for any failure other than not-found,
/// and `IgnoreFileError::CurrentDir` if the working directory is unavailable.
pub fn read_eslint_ignore() -> Result<Option<Vec<String>>, IgnoreFileError> {
    let cwd = env::current_dir().map_err(IgnoreFileError::CurrentDir)?;
    read_ignore_file(cwd.join(ESLINT_IGNORE_FILE))
}

/// Read an ignore file at an explicit path
///
/// The read is attempted directly and a not-found failure is classified as
/// an absent file, so there is no window between checking and reading.
pub fn read_ignore_file(path: impl AsRef<Path>) -> Result<Option<Vec<String>>, IgnoreFileError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(parse_ignore_entries(&content))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(IgnoreFileError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse ignore-file text into entries
pub fn parse_ignore_entries(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty() && !is_comment(line))
        .map(str::to_string)
        .collect()
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn is_comment(line: &str) -> bool {
    COMMENT_MARKERS
        .iter()
        .any(|marker| line.starts_with(marker))
}

/// Gitignore-style matcher compiled from ignore entries
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    root: PathBuf,
    gitignore: Gitignore,
}

impl IgnoreMatcher {
    /// Whether `path` (or one of its parent directories) is ignored
    ///
    /// Relative paths are taken relative to the matcher root. Absolute
    /// paths outside the root are never ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        if path.is_absolute() && !path.starts_with(&self.root) {
            return false;
        }

        matches!(
            self.gitignore.matched_path_or_any_parents(path, is_dir),
            Match::Ignore(_)
        )
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.gitignore.num_ignores() as usize + self.gitignore.num_whitelists() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.gitignore.is_empty()
    }
}

/// Compile ignore entries into a matcher rooted at `root`
///
/// # Errors
///
/// Returns `IgnoreFileError::InvalidPattern` for the first entry that is not
/// a valid gitignore glob.
pub fn build_ignore_matcher(
    root: impl AsRef<Path>,
    entries: &[String],
) -> Result<IgnoreMatcher, IgnoreFileError> {
    let root = root.as_ref();
    let mut builder = GitignoreBuilder::new(root);

    for entry in entries {
        builder
            .add_line(None, entry)
            .map_err(|e| IgnoreFileError::InvalidPattern {
                pattern: entry.clone(),
                message: e.to_string(),
            })?;
    }

    let gitignore = builder
        .build()
        .map_err(|e| IgnoreFileError::InvalidPattern {
            pattern: entries.join(", "),
            message: e.to_string(),
        })?;

    Ok(IgnoreMatcher {
        root: root.to_path_buf(),
        gitignore,
    })
}
