//! Run configuration and the forwarded-argument list.
//!
//! The validation suite receives a constrained subset of our flags
//! verbatim. Artifact cleanup is on by default, so `--cleanup` is queued
//! up front; `--no-cleanup` is a negation, not an addition — it removes
//! the queued enabling flag rather than merely appending itself.

use super::args::Cli;
use std::path::PathBuf;

/// Ordered argument list handed to the validation suite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedArgs(Vec<String>);

impl ForwardedArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a boolean flag.
    pub fn push_flag(&mut self, flag: &str) {
        self.0.push(flag.to_string());
    }

    /// Append a value-taking flag and its single value token.
    pub fn push_value(&mut self, flag: &str, value: impl Into<String>) {
        self.0.push(flag.to_string());
        self.0.push(value.into());
    }

    /// Apply a negation: remove every occurrence of the enabling flag,
    /// then append the negating flag.
    pub fn negate(&mut self, enabling: &str, negation: &str) {
        self.0.retain(|arg| arg != enabling);
        self.push_flag(negation);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|a| a == flag)
    }
}

/// Immutable configuration for one run, built once from parsed arguments.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Verify the toolchain and stop before locating the validator.
    pub check_only: bool,
    /// Verbose logging for this process.
    pub verbose: bool,
    /// Suppress colored output.
    pub no_color: bool,
    /// Directory the entry point search starts from (defaults to cwd).
    pub start_dir: Option<PathBuf>,
    /// Arguments forwarded verbatim to the validation suite.
    pub forwarded: ForwardedArgs,
}

impl RunConfig {
    /// Build the run configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut forwarded = ForwardedArgs::new();

        // Cleanup is the validator's default behavior; queue it explicitly
        // so the negation below has something to remove.
        forwarded.push_flag("--cleanup");

        if cli.verbose {
            forwarded.push_flag("--verbose");
        }
        if cli.parallel {
            forwarded.push_flag("--parallel");
        }
        if cli.no_color {
            forwarded.push_flag("--no-color");
        }
        if let Some(config) = &cli.config {
            forwarded.push_value("--config", config.display().to_string());
        }
        if let Some(root) = &cli.root {
            forwarded.push_value("--root", root.display().to_string());
        }
        if let Some(timeout) = cli.timeout {
            forwarded.push_value("--timeout", timeout.to_string());
        }
        if let Some(max_workers) = cli.max_workers {
            forwarded.push_value("--max-workers", max_workers.to_string());
        }
        if cli.no_cleanup {
            forwarded.negate("--cleanup", "--no-cleanup");
        }

        Self {
            check_only: cli.check_only,
            verbose: cli.verbose,
            no_color: cli.no_color,
            start_dir: cli.root.clone(),
            forwarded,
        }
    }
}
