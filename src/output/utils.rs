//! Plain-text rendering shared by the formatters

use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::WalkError;
use crate::metadata::EntryKind;
use crate::tree::format_size;
use crate::tree::traversal::LAST_BRANCH;

use super::{Detail, EntryLine};

/// Rule printed around the header and above the summary.
pub const SEPARATOR: &str = "==================================================";

pub const DIR_ICON: &str = "📁";
pub const FILE_ICON: &str = "📄";
pub const ERROR_ICON: &str = "❌";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp in local time, e.g. `2024-05-01 13:37:00`.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Render a single detail as it appears inside the brackets.
pub fn format_detail(detail: &Detail) -> String {
    match detail {
        Detail::Size(bytes) => format_size(*bytes),
        Detail::RollUp(Some(bytes)) => format!("({})", format_size(*bytes)),
        Detail::RollUp(None) => "(size unknown)".to_string(),
        Detail::Modified(Some(time)) => format_timestamp(*time),
        Detail::Modified(None) => "Unknown".to_string(),
    }
}

/// Render the bracketed detail suffix, or nothing when there are no details.
pub fn details_suffix(details: &[Detail]) -> String {
    if details.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = details.iter().map(format_detail).collect();
    format!(" [{}]", parts.join(", "))
}

pub fn icon(kind: EntryKind) -> &'static str {
    if kind.is_dir() { DIR_ICON } else { FILE_ICON }
}

/// Render an entry line without color or trailing newline.
pub fn render_entry(line: &EntryLine<'_>) -> String {
    let slash = if line.kind.is_dir() { "/" } else { "" };
    format!(
        "{}{}{} {}{}{}",
        line.prefix,
        line.connector,
        icon(line.kind),
        line.name,
        slash,
        details_suffix(&line.details)
    )
}

/// Message for a subtree that could not be listed.
pub fn failure_message(error: &WalkError) -> String {
    match error {
        WalkError::PermissionDenied { .. } => "Permission denied".to_string(),
        WalkError::Io { source, .. } => format!("Error: {}", source),
        other => format!("Error: {}", other),
    }
}

/// Message for a root that could not be listed.
pub fn root_failure_message(error: &WalkError) -> String {
    match error {
        WalkError::NotFound { path } => format!("Path does not exist: {}", path.display()),
        WalkError::PermissionDenied { path } => format!("Permission denied: {}", path.display()),
        WalkError::Io { path, source } => {
            format!("Error processing {}: {}", path.display(), source)
        }
        WalkError::Output(e) => format!("Error: {}", e),
    }
}

/// Render a contained failure line without color or trailing newline.
pub fn render_failure(prefix: &str, error: &WalkError) -> String {
    format!(
        "{}{}{} {}",
        prefix,
        LAST_BRANCH,
        ERROR_ICON,
        failure_message(error)
    )
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_render_file_line() {
        let line = EntryLine {
            prefix: "    ",
            connector: "├── ",
            name: "main.rs",
            kind: EntryKind::File,
            details: vec![Detail::Size(1536)],
        };
        assert_eq!(render_entry(&line), "    ├── 📄 main.rs [1.5 KB]");
    }

    #[test]
    fn test_render_directory_line() {
        let line = EntryLine {
            prefix: "",
            connector: "",
            name: "src",
            kind: EntryKind::Directory,
            details: vec![Detail::RollUp(Some(2048)), Detail::Modified(None)],
        };
        assert_eq!(render_entry(&line), "📁 src/ [(2 KB), Unknown]");
    }

    #[test]
    fn test_render_line_without_details() {
        let line = EntryLine {
            prefix: "",
            connector: "",
            name: "notes",
            kind: EntryKind::Unknown,
            details: Vec::new(),
        };
        assert_eq!(render_entry(&line), "📄 notes");
    }

    #[test]
    fn test_format_detail_unknown_rollup() {
        assert_eq!(format_detail(&Detail::RollUp(None)), "(size unknown)");
        assert_eq!(format_detail(&Detail::Size(0)), "0 B");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(SystemTime::now());
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn test_render_failures() {
        let denied = WalkError::PermissionDenied {
            path: PathBuf::from("/x/locked"),
        };
        assert_eq!(render_failure("    ", &denied), "    └── ❌ Permission denied");

        let other = WalkError::Io {
            path: PathBuf::from("/x/bad"),
            source: io::Error::other("bad sector"),
        };
        assert_eq!(render_failure("", &other), "└── ❌ Error: bad sector");
    }

    #[test]
    fn test_root_failure_messages() {
        let missing = WalkError::NotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(root_failure_message(&missing), "Path does not exist: /nope");

        let denied = WalkError::PermissionDenied {
            path: PathBuf::from("/root"),
        };
        assert_eq!(root_failure_message(&denied), "Permission denied: /root");
    }
}
