//! CLI arguments and parsing

use crate::output::ExportFormat;
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Keyword searched when none is given
pub const DEFAULT_KEYWORD: &str = "Best Peptides";

/// Videos collected when no usable target is given
pub const DEFAULT_TARGET: usize = 50;

/// Collect video search results into a spreadsheet-friendly file
#[derive(Parser, Debug)]
#[command(name = "tiktok-scraper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Search keyword
    #[arg(default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// Number of videos to collect (non-numeric falls back to 50)
    #[arg(allow_negative_numbers = true)]
    pub target: Option<String>,

    /// File holding the session cookie
    #[arg(long)]
    pub cookie_file: Option<PathBuf>,

    /// Output file (default: timestamped file in the working directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Pause between pages, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Scraper configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Target count after lenient parsing
    pub fn target_count(&self) -> usize {
        parse_target(self.target.as_deref())
    }
}

/// Parse the target argument
///
/// Missing or non-numeric input gives [`DEFAULT_TARGET`]; a negative
/// number gives 0.
pub fn parse_target(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_TARGET;
    };

    match raw.trim().parse::<i64>() {
        Ok(n) if n < 0 => {
            warn!("Negative target {n}, nothing will be collected");
            0
        }
        Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
        Err(_) => {
            warn!("Invalid target '{raw}', using {DEFAULT_TARGET}");
            DEFAULT_TARGET
        }
    }
}
