//! The run pipeline: detect, install, verify, locate, validate.
//!
//! Strictly sequential with no partial continuation: every stage either
//! hands a complete result to the next or fails the whole run. The stages
//! are injected as [`Collaborators`] so the pipeline's control flow can be
//! tested without touching the host.

use std::path::{Path, PathBuf};

use crate::cli::RunConfig;
use crate::entry::{locator, ResolvedEntry};
use crate::error::{Result, TrailheadError};
use crate::install::{installer, manager, InstallationAttempt, PackageManager};
use crate::runner::validator;
use crate::toolchain::{
    requirements, verifier, MissingToolSet, ToolDetector, ToolId, ToolStatus,
};
use crate::ui::UserInterface;

/// The pipeline's injected stages.
pub struct Collaborators<'a> {
    /// One fresh detection pass over every requirement.
    pub detect_all: &'a dyn Fn() -> Vec<ToolStatus>,
    /// Pick the preferred package manager for this host.
    pub select_manager: &'a dyn Fn() -> Option<PackageManager>,
    /// Dispatch installation of the missing tools.
    pub install: &'a dyn Fn(
        &MissingToolSet,
        Option<PackageManager>,
        &mut dyn UserInterface,
    ) -> Result<InstallationAttempt>,
    /// Search for the validation suite's entry point.
    pub locate_entry: &'a dyn Fn() -> std::result::Result<ResolvedEntry, Vec<PathBuf>>,
    /// Run the validation suite and return its exit code.
    pub invoke_validator: &'a dyn Fn(&Path, &ResolvedEntry, &[String]) -> Result<i32>,
}

/// Run the full pipeline and return the process exit code.
///
/// `Ok(code)` relays the validation suite's own exit status (or 0 for a
/// `--check-only` run); `Err` is a failure in our own stages.
pub fn run(
    config: &RunConfig,
    ui: &mut dyn UserInterface,
    collab: &Collaborators<'_>,
) -> Result<i32> {
    ui.show_header("Toolchain check");
    let mut statuses = (collab.detect_all)();
    report_statuses(&statuses, ui);
    let mut missing = MissingToolSet::from_statuses(&statuses);

    if !missing.is_empty() {
        ui.show_header("Installation");
        let selected = (collab.select_manager)();
        match &selected {
            Some(mgr) => ui.message(&format!("Using package manager: {}", mgr.id)),
            None => ui.warning("No supported package manager found on this host"),
        }
        (collab.install)(&missing, selected, ui)?;

        // Fresh pass; nothing is carried over from before the install.
        ui.show_header("Verification");
        statuses = (collab.detect_all)();
        report_statuses(&statuses, ui);
        missing = MissingToolSet::from_statuses(&statuses);
        if !missing.is_empty() {
            ui.message(
                "Newly installed tools may need a new shell session or an updated PATH; \
                 adjust and re-run.",
            );
            return Err(TrailheadError::VerificationFailed {
                remaining: missing.to_string(),
            });
        }
    }
    ui.success("Toolchain satisfied");

    if config.check_only {
        return Ok(0);
    }

    ui.show_header("Validation");
    let entry = match (collab.locate_entry)() {
        Ok(entry) => entry,
        Err(checked) => {
            ui.error("Could not find the validation suite's entry point. Checked:");
            for path in &checked {
                ui.message(&format!("  {}", path.display()));
            }
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            ui.message(&format!("Working directory: {}", cwd.display()));
            return Err(TrailheadError::EntryPointNotFound { cwd });
        }
    };
    tracing::debug!(
        "entry point: {} (depth {})",
        entry.script.display(),
        entry.depth
    );

    if let Some(warning) = validator::validate_project_layout(&entry.project_root) {
        ui.warning(&warning);
    }

    let python = accepted_python(&statuses);
    let code = (collab.invoke_validator)(&python, &entry, config.forwarded.as_slice())?;

    for report in validator::existing_report_paths(&entry.project_root) {
        ui.message(&format!("Report: {}", report.display()));
    }

    if code == 0 {
        ui.success("Validation suite passed");
    } else {
        ui.error(&format!("Validation suite failed (exit code {})", code));
    }
    Ok(code)
}

/// Build the production collaborators and run the pipeline.
pub fn run_default(config: &RunConfig, ui: &mut dyn UserInterface) -> Result<i32> {
    let detector = ToolDetector::new();
    let ctx = installer::default_context();

    let detect = || verifier::detect_all(&detector, requirements());
    let select = manager::select_manager;
    let install = |missing: &MissingToolSet,
                   selected: Option<PackageManager>,
                   ui: &mut dyn UserInterface| {
        installer::install(missing, selected, ui, &ctx)
    };
    let locate = || match &config.start_dir {
        Some(dir) => locator::locate_from(dir),
        None => locator::locate(),
    };
    let invoke = |python: &Path, entry: &ResolvedEntry, args: &[String]| {
        validator::invoke(python, entry, args)
    };

    let collab = Collaborators {
        detect_all: &detect,
        select_manager: &select,
        install: &install,
        locate_entry: &locate,
        invoke_validator: &invoke,
    };
    run(config, ui, &collab)
}

fn report_statuses(statuses: &[ToolStatus], ui: &mut dyn UserInterface) {
    for (status, req) in statuses.iter().zip(requirements()) {
        let line = status.describe(req);
        if status.meets_minimum {
            ui.success(&line);
        } else if status.found {
            ui.warning(&line);
        } else {
            ui.error(&line);
        }
    }
}

/// Path of the accepted python binary from the last detection pass.
fn accepted_python(statuses: &[ToolStatus]) -> PathBuf {
    statuses
        .iter()
        .find(|s| s.id == ToolId::Python)
        .and_then(|s| s.resolved_path.clone())
        .unwrap_or_else(|| PathBuf::from("python3"))
}
