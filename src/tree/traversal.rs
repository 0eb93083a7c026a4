//! Directory enumeration, ordering and tree-drawing prefixes.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WalkError;
use crate::metadata::{EntryInfo, probe};

use super::config::WalkConfig;
use super::utils::is_hidden;

pub const LAST_BRANCH: &str = "└── ";
pub const MID_BRANCH: &str = "├── ";
const LAST_CONTINUATION: &str = "    ";
const MID_CONTINUATION: &str = "│   ";

/// One child of a directory, probed and ready to be displayed.
#[derive(Debug)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    pub info: EntryInfo,
}

/// Read the immediate children of `path`, drop hidden ones unless configured
/// otherwise, probe each, and return them in display order.
pub fn read_entries(path: &Path, config: &WalkConfig) -> Result<Vec<ListedEntry>, WalkError> {
    let dir = fs::read_dir(path).map_err(|e| WalkError::from_io(path, e))?;

    let mut entries: Vec<ListedEntry> = dir
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::debug!("skipping unreadable entry in {}: {}", path.display(), err);
                None
            }
        })
        .map(|entry| entry.path())
        .filter(|entry_path| config.show_hidden || !is_hidden(entry_path))
        .map(|entry_path| ListedEntry {
            name: entry_path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
            info: probe(&entry_path).info(),
            path: entry_path,
        })
        .collect();

    entries.sort_by(compare_entries);
    Ok(entries)
}

/// Directories first, then everything else; case-insensitive by name within
/// each group. Names equal ignoring case fall back to a byte comparison so the
/// order never depends on the order the OS returned them in.
pub fn compare_entries(a: &ListedEntry, b: &ListedEntry) -> Ordering {
    compare_names(a.info.kind.is_dir(), &a.name, b.info.kind.is_dir(), &b.name)
}

fn compare_names(a_dir: bool, a: &str, b_dir: bool, b: &str) -> Ordering {
    b_dir
        .cmp(&a_dir)
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Connector drawn before an entry's name. Entries directly under the root
/// get none.
pub fn connector(depth: usize, is_last: bool) -> &'static str {
    if depth == 0 {
        ""
    } else if is_last {
        LAST_BRANCH
    } else {
        MID_BRANCH
    }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(current_prefix: &str, depth: usize, is_last: bool) -> String {
    if depth == 0 || is_last {
        format!("{}{}", current_prefix, LAST_CONTINUATION)
    } else {
        format!("{}{}", current_prefix, MID_CONTINUATION)
    }
}
