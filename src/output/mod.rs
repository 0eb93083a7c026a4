//! Listing output
//!
//! The walker does not print anything itself. It describes each line as an
//! [`EntryLine`] and hands it to a [`ListingOutput`], which decides how it
//! looks and where it goes.
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Plain-text rendering of details, timestamps and lines
//! - `formatter` - Colored console formatter for the full report
//! - `json` - JSON summary output

mod config;
mod formatter;
mod json;
mod utils;

use std::io;
use std::time::SystemTime;

use crate::error::WalkError;
use crate::metadata::EntryKind;

pub use config::OutputConfig;
pub use formatter::ListingFormatter;
pub use json::{JsonSummary, print_json, write_json};
pub use utils::{SEPARATOR, format_detail, format_timestamp, render_entry, render_failure};

/// One bracketed detail shown after an entry's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// Size of a file in bytes
    Size(u64),
    /// Rolled-up size of a directory, `None` when the scan failed
    RollUp(Option<u64>),
    /// Modification time, `None` when it could not be read
    Modified(Option<SystemTime>),
}

/// A single rendered entry in the tree.
#[derive(Debug, Clone)]
pub struct EntryLine<'a> {
    /// Indentation inherited from ancestors
    pub prefix: &'a str,
    /// Branch glyph, empty for entries directly under the root
    pub connector: &'static str,
    pub name: &'a str,
    pub kind: EntryKind,
    pub details: Vec<Detail>,
}

/// Receives lines from the walker in depth-first order.
pub trait ListingOutput {
    fn entry(&mut self, line: &EntryLine<'_>) -> io::Result<()>;

    /// A subtree could not be listed. `prefix` is the indentation of the
    /// subtree's children.
    fn contained_failure(&mut self, prefix: &str, error: &WalkError) -> io::Result<()>;

    /// The root itself could not be listed.
    fn root_failure(&mut self, error: &WalkError) -> io::Result<()>;
}

/// Output sink that drops every line. Used when only the stats are wanted.
#[derive(Debug, Default)]
pub struct Discard;

impl ListingOutput for Discard {
    fn entry(&mut self, _line: &EntryLine<'_>) -> io::Result<()> {
        Ok(())
    }

    fn contained_failure(&mut self, _prefix: &str, _error: &WalkError) -> io::Result<()> {
        Ok(())
    }

    fn root_failure(&mut self, _error: &WalkError) -> io::Result<()> {
        Ok(())
    }
}
