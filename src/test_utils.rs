//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Build a tree `depth` levels deep where every directory holds
    /// `files_per_dir` files of `file_size` bytes and `dirs_per_dir` subdirectories.
    pub fn generated(depth: usize, dirs_per_dir: usize, files_per_dir: usize, file_size: usize) -> Self {
        let tree = Self::new();
        tree.populate(tree.path(), depth, dirs_per_dir, files_per_dir, file_size);
        tree
    }

    fn populate(&self, dir: &Path, depth: usize, dirs: usize, files: usize, file_size: usize) {
        for i in 0..files {
            fs::write(dir.join(format!("file_{}.dat", i)), vec![b'x'; file_size])
                .expect("Failed to write file");
        }
        if depth == 0 {
            return;
        }
        for i in 0..dirs {
            let sub = dir.join(format!("dir_{}", i));
            fs::create_dir(&sub).expect("Failed to create dir");
            self.populate(&sub, depth - 1, dirs, files, file_size);
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
