//! Post-install verification.
//!
//! A single re-detection pass over the full requirement set. No retry
//! loop, no backoff, no polling: installation has fully completed by the
//! time this runs (strict writer-then-reader ordering), so whatever this
//! pass sees is the final word. A non-empty missing set here is a hard
//! failure for the run.

use super::detector::ToolDetector;
use super::requirement::ToolRequirement;
use super::status::{MissingToolSet, ToolStatus};

/// The outcome of one full detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub statuses: Vec<ToolStatus>,
    pub missing: MissingToolSet,
}

impl VerificationReport {
    /// Whether every requirement met its minimum.
    pub fn converged(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Run one fresh detection pass over every requirement.
pub fn detect_all(detector: &ToolDetector<'_>, requirements: &[ToolRequirement]) -> Vec<ToolStatus> {
    requirements.iter().map(|req| detector.detect(req)).collect()
}

/// Re-verify the full requirement set after installation.
pub fn verify(detector: &ToolDetector<'_>, requirements: &[ToolRequirement]) -> VerificationReport {
    let statuses = detect_all(detector, requirements);
    let missing = MissingToolSet::from_statuses(&statuses);
    VerificationReport { statuses, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::requirement::requirements;
    use std::cell::Cell;
    use std::fs;
    use std::path::Path;
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

    fn populate_full_toolchain(dir: &Path) {
        for name in ["python3", "git", "cmake", "g++"] {
            create_fake_binary(&dir.join(name));
        }
    }

    fn modern_versions(bin: &Path, _args: &[&str]) -> Option<String> {
        let name = bin.file_name()?.to_str()?;
        Some(
            match name {
                "python3" | "python" => "Python 3.12.1",
                "git" => "git version 2.43.0",
                "cmake" => "cmake version 3.28.1",
                _ => "g++ (GCC) 13.2.0",
            }
            .to_string(),
        )
    }

    #[test]
    fn verify_converges_when_everything_satisfied() {
        let temp = TempDir::new().unwrap();
        populate_full_toolchain(temp.path());

        let detector =
            ToolDetector::with_probes(vec![temp.path().to_path_buf()], modern_versions);
        let report = verify(&detector, requirements());

        assert!(report.converged());
        assert_eq!(report.statuses.len(), requirements().len());
    }

    #[test]
    fn verify_reports_gaps() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("python3"));
        create_fake_binary(&temp.path().join("git"));

        let detector =
            ToolDetector::with_probes(vec![temp.path().to_path_buf()], modern_versions);
        let report = verify(&detector, requirements());

        assert!(!report.converged());
        assert_eq!(report.missing.to_string(), "cmake, compiler");
    }

    #[test]
    fn consecutive_passes_agree_for_fixed_host_state() {
        let temp = TempDir::new().unwrap();
        populate_full_toolchain(temp.path());

        let detector =
            ToolDetector::with_probes(vec![temp.path().to_path_buf()], modern_versions);
        let first = verify(&detector, requirements());
        let second = verify(&detector, requirements());

        assert_eq!(first, second);
    }

    #[test]
    fn verification_observes_state_changed_between_passes() {
        // Simulates an install upgrading python between detection and
        // verification: same detector, fresh probe, new answer.
        let temp = TempDir::new().unwrap();
        populate_full_toolchain(temp.path());

        let upgraded = Cell::new(false);
        let detector = ToolDetector::with_probes(vec![temp.path().to_path_buf()], |bin, _| {
            let name = bin.file_name()?.to_str()?;
            Some(
                match name {
                    "python3" if !upgraded.get() => "Python 3.6.9".to_string(),
                    "python3" => "Python 3.12.1".to_string(),
                    "git" => "git version 2.43.0".to_string(),
                    "cmake" => "cmake version 3.28.1".to_string(),
                    _ => "g++ (GCC) 13.2.0".to_string(),
                },
            )
        });

        let before = verify(&detector, requirements());
        assert!(before.missing.contains(crate::toolchain::ToolId::Python));

        upgraded.set(true);
        let after = verify(&detector, requirements());
        assert!(after.converged());
    }
}
