use clap::Parser;
use std::path::PathBuf;

/// memtrend: offline memory-leak trend analyzer
///
/// Reads per-process resource samples (CSV or JSON), classifies each
/// process's memory trend, draws an RSS chart and suggests remediation
/// for processes that look like they leak.
#[derive(Parser, Debug)]
#[command(name = "memtrend")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Sample file: CSV with a header row, or a JSON array (`.json`)
    pub input: String,

    /// Path to custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chart width in columns (overrides config)
    #[arg(long)]
    pub width: Option<usize>,

    /// Chart height in rows (overrides config)
    #[arg(long)]
    pub height: Option<usize>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
