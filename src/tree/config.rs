//! Configuration types for the tree walker

/// Configuration for one listing run. Never mutated once the walk starts.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    /// Show file sizes and rolled-up directory sizes
    pub show_sizes: bool,
    /// Show modification timestamps
    pub show_dates: bool,
    /// Number of levels to list below the root (`None` = unlimited)
    pub max_depth: Option<usize>,
    /// Accepted and echoed in the header; not applied to the listing.
    pub filter_pattern: Option<String>,
}

impl WalkConfig {
    /// Check whether entries at `depth` fall outside the depth limit.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            show_sizes: true, // sizes are on unless --no-sizes
            show_dates: false,
            max_depth: None,
            filter_pattern: None,
        }
    }
}
