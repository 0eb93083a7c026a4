//! Directory size roll-up
//!
//! The roll-up is a separate, unlimited-depth scan: a directory's displayed
//! size covers everything beneath it even when the listing itself stops at
//! `--depth`. Hidden entries are always included. Links to files count with
//! their target's size, as they do in the listing; links to directories are
//! never entered.

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;

/// Sum the sizes of every regular file beneath `dir`.
///
/// Any unreadable directory or file aborts the scan, since a partial sum
/// would understate the size.
pub fn rollup_size(dir: &Path) -> Result<u64, ignore::Error> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut total = 0u64;
    for entry in walker {
        let entry = entry?;
        if entry.path_is_symlink() {
            total += linked_file_size(entry.path());
        } else if entry.file_type().is_some_and(|t| t.is_file()) {
            total += entry.metadata()?.len();
        }
    }

    Ok(total)
}

/// Size of the file a link points at. Dangling links and links to
/// directories contribute nothing.
fn linked_file_size(link: &Path) -> u64 {
    match fs::metadata(link) {
        Ok(meta) if meta.is_file() => meta.len(),
        Ok(_) => 0,
        Err(e) => {
            tracing::trace!("not following {}: {}", link.display(), e);
            0
        }
    }
}
