//! Tool requirements, detection, and verification.
//!
//! A [`ToolRequirement`] names a tool, its candidate executables, and the
//! minimum acceptable version. The [`ToolDetector`] probes the host fresh on
//! every pass — results are never carried between the initial detection and
//! the post-install verification, which is what makes the two passes an
//! idempotence check on the host state.

pub mod detector;
pub mod requirement;
pub mod status;
pub mod verifier;
pub mod version;

pub use detector::ToolDetector;
pub use requirement::{requirements, ToolCandidate, ToolId, ToolRequirement};
pub use status::{MissingToolSet, ToolStatus};
pub use verifier::{detect_all, verify, VerificationReport};
pub use version::{extract_version, Version, VersionParseError};
