//! Console formatter
//!
//! This module provides `ListingFormatter`, which writes the header, the tree
//! lines and the summary block to any `WriteColor` sink. Lines go out as soon
//! as the walker produces them.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::WalkError;
use crate::tree::{WalkConfig, WalkStats, format_count, format_size};

use super::config::OutputConfig;
use super::utils::{ERROR_ICON, SEPARATOR, failure_message, format_detail, icon, root_failure_message};
use super::{Detail, EntryLine, ListingOutput};
use crate::tree::traversal::LAST_BRANCH;

/// Formatter for the full console report.
pub struct ListingFormatter<W: WriteColor> {
    out: W,
}

impl ListingFormatter<StandardStream> {
    /// Formatter writing to stdout, colored when the config asks for it.
    /// The environment has already been consulted when building the config.
    pub fn stdout(config: &OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ListingFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the header block: title, resolved path, generation time and the
    /// active options.
    pub fn header(&mut self, root: &Path, generated: &str, config: &WalkConfig) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(self.out, "📂 Recursive Directory Listing")?;
        self.out.reset()?;
        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "📍 Path: {}", root.display())?;
        writeln!(self.out, "🕒 Generated: {}", generated)?;

        if let Some(depth) = config.max_depth.filter(|d| *d > 0) {
            writeln!(self.out, "📏 Max depth: {}", depth)?;
        }
        if config.show_hidden {
            writeln!(self.out, "👁️ Including hidden files")?;
        }
        if config.show_dates {
            writeln!(self.out, "📅 Showing dates")?;
        }
        if config.show_sizes {
            writeln!(self.out, "📊 Showing sizes")?;
        }
        if let Some(ref pattern) = config.filter_pattern {
            writeln!(self.out, "🔍 Filter: {}", pattern)?;
        }

        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Summary shown when the root is a single file.
    pub fn single_file_summary(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "📊 Summary: 1 file")
    }

    /// Summary block closing a directory listing.
    pub fn summary(&mut self, stats: &WalkStats, show_sizes: bool) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", SEPARATOR)?;
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(self.out, "📊 Summary:")?;
        self.out.reset()?;
        writeln!(
            self.out,
            "   📁 Directories: {}",
            format_count(stats.directories)
        )?;
        writeln!(self.out, "   📄 Files: {}", format_count(stats.files))?;
        if show_sizes && stats.total_size > 0 {
            writeln!(self.out, "   💾 Total size: {}", format_size(stats.total_size))?;
        }
        Ok(())
    }

    /// One-line summary used by quick listings.
    pub fn quick_summary(&mut self, stats: &WalkStats) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Summary: {} dirs, {} files, {}",
            stats.directories,
            stats.files,
            format_size(stats.total_size)
        )
    }

    fn write_details(&mut self, details: &[Detail]) -> io::Result<()> {
        if details.is_empty() {
            return Ok(());
        }
        write!(self.out, " [")?;
        for (i, detail) in details.iter().enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            let color = match detail {
                Detail::Size(_) | Detail::RollUp(Some(_)) => Color::Green,
                Detail::Modified(Some(_)) => Color::Cyan,
                Detail::RollUp(None) | Detail::Modified(None) => Color::Yellow,
            };
            self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(self.out, "{}", format_detail(detail))?;
            self.out.reset()?;
        }
        write!(self.out, "]")
    }

    fn write_error(&mut self, message: &str) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(self.out, "{} {}", ERROR_ICON, message)?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

impl<W: WriteColor> ListingOutput for ListingFormatter<W> {
    fn entry(&mut self, line: &EntryLine<'_>) -> io::Result<()> {
        write!(self.out, "{}{}", line.prefix, line.connector)?;

        if line.kind.is_dir() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{} {}/", icon(line.kind), line.name)?;
        } else {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            write!(self.out, "{} {}", icon(line.kind), line.name)?;
        }
        self.out.reset()?;

        self.write_details(&line.details)?;
        writeln!(self.out)
    }

    fn contained_failure(&mut self, prefix: &str, error: &WalkError) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, LAST_BRANCH)?;
        self.write_error(&failure_message(error))
    }

    fn root_failure(&mut self, error: &WalkError) -> io::Result<()> {
        self.write_error(&root_failure_message(error))
    }
}
