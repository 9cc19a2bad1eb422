//! Version extraction from tool output.
//!
//! Tools report versions in different layouts (`Python 3.12.1`,
//! `git version 2.43.0`, `cmake version 3.28.1`, MSVC's multi-line banner),
//! so extraction is isolated here: take the first `major.minor` pair in the
//! output rather than assuming a fixed token position.
//!
//! Malformed or non-numeric version output yields a [`VersionParseError`];
//! callers treat that as not meeting the minimum rather than guessing.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// A major.minor version pair.
///
/// Patch levels are ignored — minimums are only ever expressed as
/// major.minor, and some tools don't report a patch at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    /// Create a version from major and minor components.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Version output could not be parsed into a major.minor pair.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No parsable version in output: {snippet:?}")]
pub struct VersionParseError {
    /// Leading portion of the offending output, for diagnostics.
    pub snippet: String,
}

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\.(\d+)").expect("version regex is valid"))
}

/// Extract the first major.minor version from a tool's version output.
pub fn extract_version(output: &str) -> Result<Version, VersionParseError> {
    let make_err = || VersionParseError {
        snippet: output.chars().take(80).collect(),
    };

    let captures = version_regex().captures(output).ok_or_else(make_err)?;
    let major = captures[1].parse().map_err(|_| make_err())?;
    let minor = captures[2].parse().map_err(|_| make_err())?;
    Ok(Version::new(major, minor))
}
