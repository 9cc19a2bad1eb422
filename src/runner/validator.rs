//! Invoking the validation suite and reporting its artifacts.
//!
//! The suite is an external collaborator: we hand it the forwarded
//! argument list, relay its exit status, and check (but never parse) the
//! report artifacts it leaves behind.

use crate::entry::ResolvedEntry;
use crate::error::{Result, TrailheadError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Report artifacts the suite may produce, relative to the project root.
pub const REPORT_ARTIFACTS: &[&str] = &[
    ".devcheck/test_report.json",
    ".devcheck/test_report.html",
];

/// Directories and files the suite expects to find projects under.
const EXPECTED_LAYOUT: &[&str] = &["src", "scripts", "python", "CMakeLists.txt"];

/// Check the project root against the layout the suite searches.
///
/// Returns a warning message when nothing recognizable is present. This is
/// advisory only — the suite does its own discovery and may still succeed.
pub fn validate_project_layout(root: &Path) -> Option<String> {
    if EXPECTED_LAYOUT.iter().any(|p| root.join(p).exists()) {
        return None;
    }
    Some(format!(
        "{} has none of the expected project layout ({}); the validation suite may find nothing to check",
        root.display(),
        EXPECTED_LAYOUT.join(", ")
    ))
}

/// Run the validation suite and return its exit code.
///
/// Blocks until the suite exits; its stdio is inherited so the user sees
/// the suite's own output directly. A signal-terminated suite maps to
/// exit code 1.
pub fn invoke(python: &Path, entry: &ResolvedEntry, args: &[String]) -> Result<i32> {
    tracing::info!(
        "invoking validator: {} {} {}",
        python.display(),
        entry.script.display(),
        args.join(" ")
    );

    let status = Command::new(python)
        .arg(&entry.script)
        .args(args)
        .current_dir(&entry.project_root)
        .status()
        .map_err(|e| TrailheadError::CommandSpawnFailed {
            command: format!("{} {}", python.display(), entry.script.display()),
            message: e.to_string(),
        })?;

    Ok(status.code().unwrap_or(1))
}

/// The report artifacts that actually exist after a run.
pub fn existing_report_paths(project_root: &Path) -> Vec<PathBuf> {
    REPORT_ARTIFACTS
        .iter()
        .map(|rel| project_root.join(rel))
        .filter(|p| p.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn layout_warning_for_empty_root() {
        let temp = TempDir::new().unwrap();
        let warning = validate_project_layout(temp.path()).unwrap();
        assert!(warning.contains("src"));
    }

    #[test]
    fn no_layout_warning_when_sources_present() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        assert!(validate_project_layout(temp.path()).is_none());
    }

    #[test]
    fn no_layout_warning_for_cmake_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CMakeLists.txt"), "").unwrap();
        assert!(validate_project_layout(temp.path()).is_none());
    }

    #[test]
    fn reports_only_existing_artifacts() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".devcheck")).unwrap();
        fs::write(temp.path().join(".devcheck/test_report.json"), "{}").unwrap();

        let reports = existing_report_paths(temp.path());
        assert_eq!(reports, [temp.path().join(".devcheck/test_report.json")]);
    }

    #[test]
    fn reports_empty_when_suite_left_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(existing_report_paths(temp.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn invoke_relays_the_exit_code() {
        use crate::entry::locator::ResolvedEntry;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("fake_check.py");
        // Not actually python; any interpreter that exits 3 exercises the relay.
        fs::write(&script, "exit 3\n").unwrap();

        let entry = ResolvedEntry {
            script: script.clone(),
            project_root: temp.path().to_path_buf(),
            depth: 0,
        };

        let code = invoke(Path::new("/bin/sh"), &entry, &[]).unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn invoke_spawn_failure_is_an_error() {
        use crate::entry::locator::ResolvedEntry;

        let temp = TempDir::new().unwrap();
        let entry = ResolvedEntry {
            script: temp.path().join("missing.py"),
            project_root: temp.path().to_path_buf(),
            depth: 0,
        };

        let result = invoke(Path::new("/nonexistent/python"), &entry, &[]);
        assert!(matches!(
            result,
            Err(TrailheadError::CommandSpawnFailed { .. })
        ));
    }
}
