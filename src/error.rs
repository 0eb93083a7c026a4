//! Error taxonomy for directory walking

use std::io;
use std::path::{Path, PathBuf};

/// Failure while walking a directory.
///
/// Everything except [`WalkError::Output`] is contained at the directory
/// where it happened: it is rendered as a single line and the walk goes on
/// with the next sibling.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("error processing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output stream failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl WalkError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => WalkError::NotFound { path },
            io::ErrorKind::PermissionDenied => WalkError::PermissionDenied { path },
            _ => WalkError::Io { path, source: err },
        }
    }

    /// Whether this failure should be reported in place rather than abort the walk.
    pub fn is_contained(&self) -> bool {
        !matches!(self, WalkError::Output(_))
    }
}
