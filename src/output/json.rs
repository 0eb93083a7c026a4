//! JSON summary output

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::tree::{WalkStats, format_size};

/// Machine-readable summary of a walk.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    pub path: PathBuf,
    #[serde(flatten)]
    pub stats: WalkStats,
    pub total_size_human: String,
}

impl JsonSummary {
    pub fn new(path: PathBuf, stats: WalkStats) -> Self {
        Self {
            path,
            total_size_human: format_size(stats.total_size),
            stats,
        }
    }
}

/// Write the summary as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, summary: &JsonSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print the summary as JSON to stdout.
pub fn print_json(summary: &JsonSummary) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, summary)
}
