use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::page_range::parse_page_scale;

/// List the largest numbers in a PDF document.
///
/// Numbers may carry a magnitude suffix (56.7M, 1.2B) and may be scaled per
/// page (--page-scale, --detect-scale).
#[derive(Debug, Parser)]
#[command(name = "numscan", about, version)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of ranked results to display
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub top: i64,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Which ranking to print: normalized values, numbers as written, or both
    #[arg(long, value_enum, default_value_t = ReportArg::Scaled)]
    pub report: ReportArg,

    /// Rank by signed value or by absolute magnitude
    #[arg(long, value_enum, default_value_t = RankByArg::Value)]
    pub rank_by: RankByArg,

    /// Multiply every number on a page, e.g. '3=1000' (repeatable)
    #[arg(long, value_name = "PAGE=FACTOR", value_parser = parse_page_scale)]
    pub page_scale: Vec<(u32, f64)>,

    /// Scale unsuffixed numbers on pages that say "in millions", "(thousands)", ...
    #[arg(long)]
    pub detect_scale: bool,

    /// Treat K/M/B/T after a number as ordinary text
    #[arg(long)]
    pub no_suffix: bool,

    /// Password for encrypted PDFs
    #[arg(long)]
    pub password: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for ranked results.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one ranked line per value
    Text,
    /// JSON, one object per report
    Json,
    /// CSV output
    Csv,
}

/// Which rankings to print.
#[derive(Debug, Clone, ValueEnum)]
pub enum ReportArg {
    /// Values with suffix and page scale applied
    Scaled,
    /// Numbers as written, without multipliers
    Raw,
    /// Both rankings, scaled first
    Both,
}

impl ReportArg {
    /// The bases to rank, in print order.
    pub fn bases(&self) -> &'static [numscan::Basis] {
        match self {
            ReportArg::Scaled => &[numscan::Basis::Scaled],
            ReportArg::Raw => &[numscan::Basis::Raw],
            ReportArg::Both => &[numscan::Basis::Scaled, numscan::Basis::Raw],
        }
    }
}

/// Ranking order for CLI arguments.
#[derive(Debug, Clone, ValueEnum)]
pub enum RankByArg {
    /// Signed value (-50 ranks below 2)
    Value,
    /// Absolute value (-50 ranks above 2)
    Magnitude,
}

impl RankByArg {
    /// Convert to the library's `RankBy` enum.
    pub fn to_rank_by(&self) -> numscan::RankBy {
        match self {
            RankByArg::Value => numscan::RankBy::Value,
            RankByArg::Magnitude => numscan::RankBy::Magnitude,
        }
    }
}
