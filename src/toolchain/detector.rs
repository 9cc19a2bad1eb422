//! Tool detection.
//!
//! `detect` walks a requirement's candidate executables in priority order,
//! querying each one's version. A candidate that is present but below the
//! minimum does not stop the search — the next candidate name is tried, and
//! only an exhausted list reports the tool as unsatisfied (while still
//! recording that an old binary exists).
//!
//! Every call re-resolves binaries from the live PATH and re-runs the
//! version query; there is no cache, so a pass after an install observes
//! the installed state.

use super::requirement::{ToolId, ToolRequirement};
use super::status::ToolStatus;
use super::version::extract_version;
use crate::shell::{resolve_tool_path, run_capture};
use crate::shell::lookup::parse_system_path;
use std::path::{Path, PathBuf};

/// Runs a binary's version query and returns its combined output,
/// or `None` if the binary could not be executed.
pub type VersionQuery<'a> = dyn Fn(&Path, &[&str]) -> Option<String> + 'a;

/// Probes the host for required tools.
pub struct ToolDetector<'a> {
    /// Fixed PATH for tests; `None` re-parses the live PATH per call.
    path_override: Option<Vec<PathBuf>>,
    query: Box<VersionQuery<'a>>,
}

impl Default for ToolDetector<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolDetector<'static> {
    /// Create a detector that probes the real host.
    pub fn new() -> Self {
        Self {
            path_override: None,
            query: Box::new(|bin, args| run_capture(bin, args).ok().map(|r| r.output)),
        }
    }
}

impl<'a> ToolDetector<'a> {
    /// Create a detector with a fixed PATH and an injected version query,
    /// for tests.
    pub fn with_probes<F>(path: Vec<PathBuf>, query: F) -> Self
    where
        F: Fn(&Path, &[&str]) -> Option<String> + 'a,
    {
        Self {
            path_override: Some(path),
            query: Box::new(query),
        }
    }

    /// Detect a single requirement, fresh.
    pub fn detect(&self, req: &ToolRequirement) -> ToolStatus {
        let path_entries = self
            .path_override
            .clone()
            .unwrap_or_else(parse_system_path);

        let mut found_any = false;
        let mut best_seen = None;

        for candidate in req.candidates {
            let Some(bin) = resolve_tool_path(candidate.name, &path_entries) else {
                continue;
            };
            found_any = true;

            match self.query_version(&bin, candidate.version_args) {
                Some(version) if version >= req.minimum => {
                    tracing::debug!("{}: accepted {} at {}", req.id, version, bin.display());
                    return ToolStatus::accepted(req.id, version, bin);
                }
                Some(version) => {
                    tracing::debug!(
                        "{}: {} reports {} (< {}), trying next candidate",
                        req.id,
                        bin.display(),
                        version,
                        req.minimum
                    );
                    best_seen = best_seen.max(Some(version));
                }
                None => {
                    tracing::debug!(
                        "{}: no parsable version from {}, treated as below minimum",
                        req.id,
                        bin.display()
                    );
                }
            }
        }

        // Alternate detection channel: the vendor installation locator.
        // A hit here is still version-gated like any PATH candidate.
        if req.vendor_fallback {
            for bin in vendor_located_binaries(req.id) {
                found_any = true;
                if let Some(version) = self.query_version(&bin, &["--version"]) {
                    if version >= req.minimum {
                        tracing::debug!(
                            "{}: accepted {} via vendor locator at {}",
                            req.id,
                            version,
                            bin.display()
                        );
                        return ToolStatus::accepted(req.id, version, bin);
                    }
                    best_seen = best_seen.max(Some(version));
                }
            }
        }

        ToolStatus::unsatisfied(req.id, found_any, best_seen)
    }

    fn query_version(&self, bin: &Path, args: &[&str]) -> Option<super::version::Version> {
        let output = (self.query)(bin, args)?;
        extract_version(&output).ok()
    }
}

/// Binaries found through the Visual Studio installation locator.
///
/// CMake and MSVC ship inside the Visual Studio tree without landing on
/// PATH; `vswhere` (at its fixed installer location) reports the install
/// root to search under. Off Windows this channel yields nothing.
#[cfg(windows)]
fn vendor_located_binaries(id: ToolId) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::new();

    // Preferred: ask vswhere for the latest install root.
    let vswhere = PathBuf::from(
        r"C:\Program Files (x86)\Microsoft Visual Studio\Installer\vswhere.exe",
    );
    if vswhere.is_file() {
        if let Ok(result) = run_capture(
            &vswhere,
            &["-latest", "-products", "*", "-property", "installationPath"],
        ) {
            let root = result.output.trim();
            if !root.is_empty() {
                roots.push(PathBuf::from(root));
            }
        }
    }

    // Fallback: well-known edition directories.
    for base in [
        r"C:\Program Files\Microsoft Visual Studio\2022",
        r"C:\Program Files (x86)\Microsoft Visual Studio\2022",
    ] {
        for edition in ["Community", "Professional", "Enterprise", "BuildTools"] {
            roots.push(Path::new(base).join(edition));
        }
    }

    let mut binaries = Vec::new();
    for root in roots {
        match id {
            ToolId::Cmake => {
                let cmake = root
                    .join("Common7/IDE/CommonExtensions/Microsoft/CMake/CMake/bin/cmake.exe");
                if cmake.is_file() {
                    binaries.push(cmake);
                }
            }
            ToolId::Compiler => {
                // VC tools live under a versioned directory.
                let msvc = root.join("VC/Tools/MSVC");
                if let Ok(entries) = std::fs::read_dir(&msvc) {
                    for entry in entries.flatten() {
                        let cl = entry.path().join("bin/Hostx64/x64/cl.exe");
                        if cl.is_file() {
                            binaries.push(cl);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    binaries
}

#[cfg(not(windows))]
fn vendor_located_binaries(_id: ToolId) -> Vec<PathBuf> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::requirement::requirements;
    use crate::toolchain::version::Version;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn python_req() -> &'static ToolRequirement {
        &requirements()[0]
    }

    fn compiler_req() -> &'static ToolRequirement {
        requirements()
            .iter()
            .find(|r| r.id == ToolId::Compiler)
            .unwrap()
    }

    #[test]
    fn detect_reports_missing_when_no_binary_exists() {
        let temp = TempDir::new().unwrap();
        let detector = ToolDetector::with_probes(vec![temp.path().to_path_buf()], |_, _| None);

        let status = detector.detect(python_req());
        assert!(!status.found);
        assert!(!status.meets_minimum);
        assert_eq!(status.version, None);
    }

    #[test]
    fn detect_accepts_satisfying_candidate() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("python3"));

        let detector = ToolDetector::with_probes(vec![temp.path().to_path_buf()], |_, _| {
            Some("Python 3.12.1".to_string())
        });

        let status = detector.detect(python_req());
        assert!(status.meets_minimum);
        assert_eq!(status.version, Some(Version::new(3, 12)));
        assert_eq!(status.resolved_path, Some(temp.path().join("python3")));
    }

    #[test]
    fn too_old_candidate_does_not_block_next_candidate() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("python3"));
        create_fake_binary(&temp.path().join("python"));

        // python3 is ancient, python is modern
        let detector = ToolDetector::with_probes(vec![temp.path().to_path_buf()], |bin, _| {
            if bin.file_name().unwrap() == "python3" {
                Some("Python 3.6.9".to_string())
            } else {
                Some("Python 3.11.4".to_string())
            }
        });

        let status = detector.detect(python_req());
        assert!(status.meets_minimum);
        assert_eq!(status.version, Some(Version::new(3, 11)));
        assert_eq!(status.resolved_path, Some(temp.path().join("python")));
    }

    #[test]
    fn all_candidates_too_old_reports_found_but_unsatisfied() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("python3"));

        let detector = ToolDetector::with_probes(vec![temp.path().to_path_buf()], |_, _| {
            Some("Python 3.6.9".to_string())
        });

        let status = detector.detect(python_req());
        assert!(status.found, "old binary still counts as found");
        assert!(!status.meets_minimum);
        assert_eq!(status.version, Some(Version::new(3, 6)));
    }

    #[test]
    fn candidate_priority_order_wins() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("g++"));
        create_fake_binary(&temp.path().join("clang++"));

        let detector = ToolDetector::with_probes(vec![temp.path().to_path_buf()], |bin, _| {
            if bin.file_name().unwrap() == "g++" {
                Some("g++ (GCC) 13.2.0".to_string())
            } else {
                Some("clang version 17.0.6".to_string())
            }
        });

        let status = detector.detect(compiler_req());
        assert_eq!(status.resolved_path, Some(temp.path().join("g++")));
    }

    #[test]
    fn unparsable_version_treated_as_below_minimum() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("git"));

        let detector = ToolDetector::with_probes(vec![temp.path().to_path_buf()], |_, _| {
            Some("garbage output".to_string())
        });

        let status = detector.detect(&requirements()[1]);
        assert!(status.found);
        assert!(!status.meets_minimum);
        assert_eq!(status.version, None);
    }

    #[test]
    fn detection_is_idempotent_for_fixed_host_state() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("cmake"));

        let detector = ToolDetector::with_probes(vec![temp.path().to_path_buf()], |_, _| {
            Some("cmake version 3.28.1".to_string())
        });

        let req = requirements().iter().find(|r| r.id == ToolId::Cmake).unwrap();
        let first = detector.detect(req);
        let second = detector.detect(req);
        assert_eq!(first, second);
    }
}
