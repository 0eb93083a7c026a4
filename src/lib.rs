//! Canopy - a recursive directory listing with size roll-ups

pub mod error;
pub mod listing;
pub mod metadata;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::WalkError;
pub use listing::{Listing, quick_list, resolve_path};
pub use metadata::{EntryInfo, EntryKind, Probe, probe};
pub use output::{
    Detail, Discard, EntryLine, JsonSummary, ListingFormatter, ListingOutput, OutputConfig,
    print_json,
};
pub use tree::{TreeWalker, WalkConfig, WalkStats, format_count, format_size};
