//! Detection status types.
//!
//! A [`ToolStatus`] is the result of one fresh detection pass for one
//! requirement; the [`MissingToolSet`] is derived from a full pass and is
//! what gates the run past verification.

use super::requirement::{ToolId, ToolRequirement};
use super::version::Version;
use std::fmt;
use std::path::PathBuf;

/// The result of detecting a single tool. Recomputed on every pass,
/// never cached between detection and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub id: ToolId,
    /// Whether any candidate binary (or vendor-located binary) exists,
    /// regardless of version.
    pub found: bool,
    /// The accepted version when satisfied; otherwise the best version
    /// seen across too-old candidates, for diagnostics.
    pub version: Option<Version>,
    /// Whether some candidate met the requirement's minimum.
    pub meets_minimum: bool,
    /// Path of the accepted binary, when satisfied.
    pub resolved_path: Option<PathBuf>,
}

impl ToolStatus {
    /// A candidate satisfied the minimum.
    pub fn accepted(id: ToolId, version: Version, path: PathBuf) -> Self {
        Self {
            id,
            found: true,
            version: Some(version),
            meets_minimum: true,
            resolved_path: Some(path),
        }
    }

    /// No candidate satisfied the minimum. `best_seen` carries the newest
    /// too-old version encountered, if any binary existed at all.
    pub fn unsatisfied(id: ToolId, found: bool, best_seen: Option<Version>) -> Self {
        Self {
            id,
            found,
            version: best_seen,
            meets_minimum: false,
            resolved_path: None,
        }
    }

    /// One-line summary for status reporting.
    pub fn describe(&self, req: &ToolRequirement) -> String {
        if self.meets_minimum {
            let version = self
                .version
                .map(|v| v.to_string())
                .unwrap_or_else(|| "?".to_string());
            format!("{}: {} (>= {})", self.id, version, req.minimum)
        } else if self.found {
            match self.version {
                Some(v) => format!(
                    "{}: version {} is below the required minimum {}",
                    self.id, v, req.minimum
                ),
                None => format!(
                    "{}: present but its version could not be determined (need >= {})",
                    self.id, req.minimum
                ),
            }
        } else {
            format!("{}: not found (need >= {})", self.id, req.minimum)
        }
    }
}

/// The set of requirement identifiers that failed detection.
///
/// Must be empty after verification for the run to proceed; a non-empty
/// set at that point is a hard failure with no partial continuation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingToolSet(Vec<ToolId>);

impl MissingToolSet {
    /// Derive the missing set from a full detection pass.
    pub fn from_statuses(statuses: &[ToolStatus]) -> Self {
        Self(
            statuses
                .iter()
                .filter(|s| !s.meets_minimum)
                .map(|s| s.id)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, id: ToolId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ToolId> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for MissingToolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|id| id.name()).collect();
        f.write_str(&names.join(", "))
    }
}
