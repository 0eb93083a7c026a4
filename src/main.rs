//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::SystemTime;

use canopy::output::format_timestamp;
use canopy::{JsonSummary, Listing, ListingFormatter, OutputConfig, WalkConfig, print_json, resolve_path};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Recursively list folders and files in tree format")]
#[command(after_help = "Examples:
  canopy .                    # List current directory
  canopy /path/to/folder      # List specific folder
  canopy . --hidden           # Include hidden files
  canopy . --no-sizes         # Hide file sizes
  canopy . --dates            # Show modification dates
  canopy . --depth 2          # Limit to 2 levels deep")]
#[command(version)]
struct Args {
    /// Path to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Include hidden files and folders
    #[arg(long)]
    hidden: bool,

    /// Hide file sizes
    #[arg(long = "no-sizes")]
    no_sizes: bool,

    /// Show modification dates
    #[arg(long)]
    dates: bool,

    /// Maximum depth to recurse
    #[arg(long, value_name = "N")]
    depth: Option<usize>,

    /// Filter pattern (e.g. "*.py"); shown in the header but not applied
    #[arg(long, value_name = "PATTERN")]
    filter: Option<String>,

    /// Print a JSON summary instead of the tree
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Send diagnostics to stderr so stdout carries only the report.
/// Verbosity follows `RUST_LOG` (e.g. `RUST_LOG=canopy=debug`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let config = WalkConfig {
        show_hidden: args.hidden,
        show_sizes: !args.no_sizes,
        show_dates: args.dates,
        max_depth: args.depth,
        filter_pattern: args.filter.clone(),
    };

    if let Some(ref pattern) = config.filter_pattern {
        tracing::debug!("filter pattern {:?} is not applied to the listing", pattern);
    }

    let listing = Listing::new(config);

    let result = if args.json {
        listing
            .stats(&args.path)
            .and_then(|stats| print_json(&JsonSummary::new(resolve_path(&args.path), stats)))
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        let mut formatter = ListingFormatter::stdout(&output_config);
        let generated = format_timestamp(SystemTime::now());
        listing
            .run(&args.path, &generated, &mut formatter)
            .map(|stats| {
                tracing::debug!(
                    directories = stats.directories,
                    files = stats.files,
                    total_size = stats.total_size,
                    "listing complete"
                );
            })
    };

    if let Err(e) = result {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }
}
