//! Walk statistics
//!
//! Stats are plain values. Each recursive call builds its own and hands it
//! back to the caller, which adds it to its running total.

use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

/// Counts and sizes gathered by a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    pub directories: u64,
    pub files: u64,
    /// Sum of the sizes of counted files. Directories contribute nothing here.
    pub total_size: u64,
}

impl WalkStats {
    /// Stats for a single directory entry.
    pub fn directory() -> Self {
        Self {
            directories: 1,
            ..Self::default()
        }
    }

    /// Stats for a single file entry of `size` bytes.
    pub fn file(size: u64) -> Self {
        Self {
            files: 1,
            total_size: size,
            ..Self::default()
        }
    }

    /// Number of entries counted, directories and files together.
    pub fn entries(&self) -> u64 {
        self.directories + self.files
    }
}

impl Add for WalkStats {
    type Output = WalkStats;

    fn add(self, rhs: WalkStats) -> WalkStats {
        WalkStats {
            directories: self.directories + rhs.directories,
            files: self.files + rhs.files,
            total_size: self.total_size + rhs.total_size,
        }
    }
}

impl Sum for WalkStats {
    fn sum<I: Iterator<Item = WalkStats>>(iter: I) -> WalkStats {
        iter.fold(WalkStats::default(), Add::add)
    }
}
