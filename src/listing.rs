//! Full listing report: header, root line, tree and summary

use std::io;
use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::metadata::{EntryKind, probe};
use crate::output::{Detail, Discard, EntryLine, ListingFormatter, ListingOutput};
use crate::tree::{TreeWalker, WalkConfig, WalkStats, display_name};

/// Produces the complete report for one path.
pub struct Listing {
    walker: TreeWalker,
}

impl Listing {
    pub fn new(config: WalkConfig) -> Self {
        Self {
            walker: TreeWalker::new(config),
        }
    }

    pub fn config(&self) -> &WalkConfig {
        self.walker.config()
    }

    /// Write the report for `path` and return the stats it summarises.
    ///
    /// `generated` is the timestamp shown in the header.
    pub fn run<W: WriteColor>(
        &self,
        path: &Path,
        generated: &str,
        out: &mut ListingFormatter<W>,
    ) -> io::Result<WalkStats> {
        let root = resolve_path(path);
        out.header(&root, generated, self.config())?;

        if root.is_file() {
            let stats = self.single_file(&root, out)?;
            out.single_file_summary()?;
            return Ok(stats);
        }

        out.entry(&EntryLine {
            prefix: "",
            connector: "",
            name: &display_name(&root),
            kind: EntryKind::Directory,
            details: Vec::new(),
        })?;

        let stats = self.walker.walk(&root, out)?;
        out.summary(&stats, self.config().show_sizes)?;
        Ok(stats)
    }

    /// Gather stats for `path` without printing the tree.
    pub fn stats(&self, path: &Path) -> io::Result<WalkStats> {
        let root = resolve_path(path);
        if root.is_file() {
            return self.single_file(&root, &mut Discard);
        }
        self.stats_walker().walk(&root, &mut Discard)
    }

    /// Walker for stats-only runs. Roll-ups are skipped since nothing
    /// displays them.
    fn stats_walker(&self) -> TreeWalker {
        TreeWalker::new(WalkConfig {
            show_sizes: false,
            ..self.config().clone()
        })
    }

    /// A root that is a plain file is shown as one line; the walker is not used.
    fn single_file<O: ListingOutput>(&self, root: &Path, out: &mut O) -> io::Result<WalkStats> {
        let info = probe(root).info();
        let config = self.config();

        let mut details = Vec::new();
        if config.show_sizes {
            details.push(Detail::Size(info.size));
        }
        if config.show_dates {
            details.push(Detail::Modified(info.modified));
        }

        out.entry(&EntryLine {
            prefix: "",
            connector: "",
            name: &display_name(root),
            kind: EntryKind::File,
            details,
        })?;

        Ok(WalkStats::file(info.size))
    }
}

/// Quick interactive listing: the tree of `path` with sizes, followed by a
/// one-line summary instead of the full header and summary blocks.
pub fn quick_list<W: WriteColor>(
    path: &Path,
    max_depth: Option<usize>,
    out: &mut ListingFormatter<W>,
) -> io::Result<WalkStats> {
    let walker = TreeWalker::new(WalkConfig {
        max_depth,
        show_sizes: true,
        ..Default::default()
    });
    let stats = walker.walk(path, out)?;
    out.quick_summary(&stats)?;
    Ok(stats)
}

/// Resolve `path` to an absolute path, following links where possible.
/// Paths that do not exist are joined onto the current directory instead.
pub fn resolve_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(path)
        }
    })
}
