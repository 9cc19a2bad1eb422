//! CLI argument definitions.
//!
//! The flag grammar is fixed: boolean flags and value-taking flags that
//! each consume exactly one following token. Anything else is rejected at
//! parse time — there is no silent ignoring of unknown flags.

use clap::Parser;
use std::path::PathBuf;

/// Trailhead - verify the toolchain, fix gaps, run the validation suite.
#[derive(Debug, Parser)]
#[command(name = "trailhead")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show verbose output (also forwarded to the validation suite)
    #[arg(short, long)]
    pub verbose: bool,

    /// Let the validation suite run its checks in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Skip the validation suite's pre-run artifact cleanup
    #[arg(long)]
    pub no_cleanup: bool,

    /// Config file for the validation suite
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Repository root the validation suite should check
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Per-operation timeout in seconds for the validation suite
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Maximum parallel workers for the validation suite
    #[arg(long, value_name = "N")]
    pub max_workers: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verify the toolchain and exit without invoking the validation suite
    #[arg(long)]
    pub check_only: bool,
}
