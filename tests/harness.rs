//! Test harness for canopy integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const SEPARATOR: &str = "==================================================";

pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_sized(&self, path: &str, len: usize) -> PathBuf {
        self.add_file(path, &"x".repeat(len))
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

pub fn run_canopy(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_canopy");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run canopy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Lines between the header block and the summary block.
pub fn tree_lines(stdout: &str) -> Vec<&str> {
    let mut separators = 0;
    stdout
        .lines()
        .filter(|line| {
            if *line == SEPARATOR {
                separators += 1;
                return false;
            }
            separators == 2
        })
        .skip(1) // blank line after the header
        .take_while(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_sized("nested/file.txt", 10);
        assert!(file_path.exists());
        assert_eq!(fs::metadata(file_path).unwrap().len(), 10);
    }

    #[test]
    fn test_tree_lines_extracts_body() {
        let stdout = format!(
            "title\n{s}\npath\n{s}\n\n📁 root/\n📄 a\n\n{s}\n📊 Summary:\n",
            s = SEPARATOR
        );
        assert_eq!(tree_lines(&stdout), ["📁 root/", "📄 a"]);
    }
}
