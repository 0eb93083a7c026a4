//! TreeWalker - recursive depth-first listing with stats roll-up

use std::io;
use std::path::Path;

use crate::error::WalkError;
use crate::metadata::EntryKind;
use crate::output::{Detail, EntryLine, ListingOutput};

use super::config::WalkConfig;
use super::rollup::rollup_size;
use super::stats::WalkStats;
use super::traversal::{ListedEntry, child_prefix, connector, read_entries};

/// Walks a directory tree, streaming one line per entry to a [`ListingOutput`]
/// and returning the counts it gathered.
///
/// Lines are emitted as soon as each entry is visited. A subtree that cannot
/// be read is reported in place and contributes nothing to the stats; its
/// siblings and ancestors are unaffected.
pub struct TreeWalker {
    config: WalkConfig,
}

impl TreeWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// List the contents of `root`. The root line itself is the caller's job.
    ///
    /// Only failures to write output are returned as errors. A missing or
    /// unreadable root is reported through the output and yields zero stats.
    pub fn walk<O: ListingOutput>(&self, root: &Path, output: &mut O) -> io::Result<WalkStats> {
        match self.walk_dir(root, 0, "", output) {
            Ok(stats) => Ok(stats),
            Err(WalkError::Output(e)) => Err(e),
            Err(e) => {
                tracing::debug!("cannot list root: {}", e);
                output.root_failure(&e)?;
                Ok(WalkStats::default())
            }
        }
    }

    fn walk_dir<O: ListingOutput>(
        &self,
        path: &Path,
        depth: usize,
        prefix: &str,
        output: &mut O,
    ) -> Result<WalkStats, WalkError> {
        if self.config.beyond_max_depth(depth) {
            return Ok(WalkStats::default());
        }

        if !path.exists() {
            return Err(WalkError::NotFound {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(depth, "listing {}", path.display());
        let entries = read_entries(path, &self.config)?;
        let total = entries.len();

        let mut stats = WalkStats::default();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;
            let kind = entry.info.kind;

            stats = stats
                + if kind.is_dir() {
                    WalkStats::directory()
                } else {
                    WalkStats::file(entry.info.size)
                };

            output.entry(&EntryLine {
                prefix,
                connector: connector(depth, is_last),
                name: &entry.name,
                kind,
                details: self.details(entry),
            })?;

            // Symlinked directories are listed but never entered
            if kind.is_dir() && !entry.path.is_symlink() && !self.config.beyond_max_depth(depth + 1)
            {
                let nested_prefix = child_prefix(prefix, depth, is_last);
                match self.walk_dir(&entry.path, depth + 1, &nested_prefix, output) {
                    Ok(child_stats) => stats = stats + child_stats,
                    Err(e) if e.is_contained() => {
                        tracing::debug!("skipping subtree: {}", e);
                        output.contained_failure(&nested_prefix, &e)?;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(stats)
    }

    /// Build the bracketed details for an entry according to the config.
    fn details(&self, entry: &ListedEntry) -> Vec<Detail> {
        let mut details = Vec::new();

        if self.config.show_sizes {
            match entry.info.kind {
                EntryKind::File => details.push(Detail::Size(entry.info.size)),
                EntryKind::Directory => {
                    let size = rollup_size(&entry.path)
                        .map_err(|e| {
                            tracing::debug!("size roll-up failed for {}: {}", entry.path.display(), e)
                        })
                        .ok();
                    details.push(Detail::RollUp(size));
                }
                EntryKind::Unknown => {}
            }
        }

        if self.config.show_dates {
            details.push(Detail::Modified(entry.info.modified));
        }

        details
    }
}
