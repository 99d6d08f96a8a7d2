//! Exploratory CSV schema profiler.
//!
//! Scans a CSV export once and prints a plain-text report of per-column
//! types, nullability, cardinality, sample values and suggested schema roles,
//! followed by an entity relationship overview.

use anyhow::Context;
use clap::{Args, Parser};
use csvsurveyor_core::{
    init_logging,
    profile::{DEFAULT_MAX_ROWS, ProfilerConfig, analyze, write_report},
};
use std::path::PathBuf;
use tracing::debug;

/// Input used when no path is given on the command line.
const DEFAULT_INPUT: &str = "sample-2025.csv";

#[derive(Parser)]
#[command(name = "csvsurveyor")]
#[command(about = "Exploratory CSV schema profiler")]
#[command(version)]
#[command(long_about = "
CSVSurveyor - one-pass CSV schema profiling

Scans a CSV file with a header row and reports, for every column:
- Inferred data types (integer, decimal, date, time, string)
- Null count and percentage (blank, whitespace, NA and NaN values)
- Cardinality bucket and sample values
- Suggested role (identifier, lookup table, primary key)

The report is written to stdout; log messages go to stderr.

EXAMPLES:
  csvsurveyor
  csvsurveyor exports/esmr-2024.csv
  csvsurveyor --max-rows 500 -v exports/esmr-2024.csv
")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// CSV file to profile
    #[arg(default_value = DEFAULT_INPUT, help = "CSV file with a header row")]
    file: PathBuf,

    /// Maximum number of data rows to scan
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_ROWS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        help = "Stop after this many data rows"
    )]
    max_rows: usize,
}

#[derive(Args)]
struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    verbose: u8,

    /// Suppress output
    #[arg(short, long, help = "Suppress all log output except errors")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    let config = ProfilerConfig::new().with_max_rows(cli.max_rows);
    debug!("Using profiler config: {:?}", config);

    let run = analyze(&cli.file, &config)
        .with_context(|| format!("Failed to profile {}", cli.file.display()))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_report(&run, &mut handle).context("Failed to write report to stdout")?;

    Ok(())
}
