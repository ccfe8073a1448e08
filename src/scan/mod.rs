//! Keyword file scanner.
//!
//! Walks a directory tree, matches every readable file line-by-line against
//! the fixed keyword list, and buffers all matches for a single CSV write at
//! the end. Unreadable files are logged and skipped; only a missing root is
//! fatal.

pub mod matcher;
pub mod report;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DecondaError, Result};

pub use matcher::{keywords_in_line, KEYWORDS};
pub use report::write_matches;

/// A single keyword hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub file_path: PathBuf,
    /// 1-based line number.
    pub line_number: usize,
    pub word: &'static str,
}

/// Scan the tree rooted at `root` and collect all keyword matches.
///
/// Matches are ordered by traversal position, then line number, then
/// keyword-list order. Traversal is sorted by file name so an unchanged
/// tree always produces the identical match sequence.
pub fn run_scan(root: &Path) -> Result<Vec<Match>> {
    if !root.exists() {
        return Err(DecondaError::ScanRootNotFound {
            path: root.to_path_buf(),
        });
    }

    tracing::info!("Scanning {}", root.display());

    let mut matches = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Error visiting entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        scan_file(entry.path(), &mut matches);
    }

    Ok(matches)
}

/// Scan one file, appending matches. Read failures are logged and skipped.
fn scan_file(path: &Path, matches: &mut Vec<Match>) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Error reading {}: {}", path.display(), e);
            return;
        }
    };

    // Best-effort decoding: binary junk becomes replacement characters
    // instead of aborting the file.
    let text = String::from_utf8_lossy(&bytes);

    for (index, line) in text.lines().enumerate() {
        for word in keywords_in_line(line) {
            matches.push(Match {
                file_path: path.to_path_buf(),
                line_number: index + 1,
                word,
            });
        }
    }
}
