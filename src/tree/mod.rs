//! Directory tree walking logic
//!
//! The walker lists a directory depth-first, one line per entry, and returns
//! the counts it gathered along the way. It never builds the tree in memory;
//! only the current path's prefix is kept, so memory use is O(depth).

mod config;
mod rollup;
mod stats;
pub(crate) mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkConfig;
pub use rollup::rollup_size;
pub use stats::WalkStats;
pub use utils::{display_name, format_count, format_size, is_hidden};
pub use walker::TreeWalker;
