//! Shared utility functions for tree walking and display

use std::path::Path;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a size in bytes to human-readable format.
///
/// Picks the largest unit that keeps the value at or above 1 and rounds to
/// two decimals, dropping trailing zeros: `1536` becomes `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut rounded = (value * 100.0).round() / 100.0;
    // 1023.999 KB rounds up to 1024 KB; show 1 MB instead
    if rounded >= 1024.0 && unit < UNITS.len() - 1 {
        rounded = ((rounded / 1024.0) * 100.0).round() / 100.0;
        unit += 1;
    }

    format!("{} {}", rounded, UNITS[unit])
}

/// Format a number with thousand separators.
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Check whether a path names a hidden entry (leading `.`).
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Get the display name of a path, falling back to the full path for roots like `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_boundaries() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_size_larger_units() {
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1 TB");
        assert_eq!(format_size(2048 * 1024u64.pow(4)), "2048 TB");
    }

    #[test]
    fn test_format_size_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.2050...
        assert_eq!(format_size(1234), "1.21 KB");
        // 1048575 B is 1023.999 KB
        assert_eq!(format_size(1_048_575), "1 MB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123456), "123,456");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new("/a/.git")));
        assert!(is_hidden(Path::new(".env")));
        assert!(!is_hidden(Path::new("/a/src")));
        assert!(!is_hidden(Path::new("file.txt")));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/a/b/project")), "project");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
