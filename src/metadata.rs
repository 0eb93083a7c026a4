//! Metadata probe for directory entries
//!
//! Probing never fails outright: an entry can vanish or lose its permissions
//! between being listed and being stat'ed, and one such entry must not stop
//! the walk. Callers get a [`Probe`] and decide what to do with the failure,
//! usually by falling back to [`EntryInfo::unknown`].

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// What kind of filesystem object an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Metadata could not be read, or the entry is neither a file nor a directory.
    Unknown,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// Information about one entry, captured at visit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    pub size: u64,
    pub modified: Option<SystemTime>,
    pub kind: EntryKind,
}

impl EntryInfo {
    /// Sentinel used when an entry's metadata cannot be read.
    pub fn unknown() -> Self {
        Self {
            size: 0,
            modified: None,
            kind: EntryKind::Unknown,
        }
    }

    fn from_metadata(meta: &fs::Metadata) -> Self {
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else if meta.is_file() {
            EntryKind::File
        } else {
            EntryKind::Unknown
        };
        Self {
            size: meta.len(),
            modified: meta.modified().ok(),
            kind,
        }
    }
}

/// Outcome of probing a path.
#[derive(Debug)]
pub enum Probe {
    Read(EntryInfo),
    Unreadable(io::Error),
}

impl Probe {
    /// The probed info, or the [`EntryInfo::unknown`] sentinel on failure.
    pub fn info(&self) -> EntryInfo {
        match self {
            Probe::Read(info) => *info,
            Probe::Unreadable(_) => EntryInfo::unknown(),
        }
    }
}

/// Stat `path`, following symbolic links.
pub fn probe(path: &Path) -> Probe {
    match fs::metadata(path) {
        Ok(meta) => Probe::Read(EntryInfo::from_metadata(&meta)),
        Err(e) => {
            tracing::trace!("probe failed for {}: {}", path.display(), e);
            Probe::Unreadable(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("data.bin");
        fs::write(&file, vec![0u8; 42]).unwrap();

        let info = probe(&file).info();
        assert_eq!(info.kind, EntryKind::File);
        assert_eq!(info.size, 42);
        assert!(info.modified.is_some());
    }

    #[test]
    fn test_probe_directory() {
        let dir = TempDir::new().unwrap();
        let info = probe(dir.path()).info();
        assert_eq!(info.kind, EntryKind::Directory);
    }

    #[test]
    fn test_probe_missing_path_yields_sentinel() {
        let dir = TempDir::new().unwrap();
        let result = probe(&dir.path().join("vanished"));

        assert!(matches!(result, Probe::Unreadable(_)));
        assert_eq!(result.info(), EntryInfo::unknown());
        assert_eq!(result.info().size, 0);
        assert!(result.info().modified.is_none());
    }

    #[test]
    #[cfg(unix)]
    fn test_probe_broken_symlink_yields_sentinel() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();

        assert_eq!(probe(&link).info().kind, EntryKind::Unknown);
    }
}
