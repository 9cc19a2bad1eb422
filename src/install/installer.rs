//! Installation dispatch.
//!
//! Three hard gates, checked in order: explicit user confirmation,
//! elevated-privilege availability, and a selected package manager. A
//! refusal at any gate prints manual install instructions and fails the
//! run — there is no partial continuation.
//!
//! Install command exit statuses are logged but deliberately not treated
//! as failures: the post-install verification pass is the sole authority
//! on whether installation worked.

use crate::error::{Result, TrailheadError};
use crate::install::manager::PackageManager;
use crate::install::privilege;
use crate::shell::run_shell;
use crate::toolchain::{MissingToolSet, ToolDetector, ToolId};
use crate::ui::UserInterface;

/// Mockable dependencies for the installer.
pub struct InstallerContext<'a> {
    /// Run a shell command, returning true on success.
    pub run_command: &'a dyn Fn(&str) -> bool,
    /// Check whether elevated privileges are available.
    pub has_privilege: &'a dyn Fn() -> bool,
    /// Fresh check of whether a tool currently satisfies its requirement.
    pub recheck: &'a dyn Fn(ToolId) -> bool,
}

/// Build the default `InstallerContext` for production use.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        run_command: &|cmd| run_shell(cmd).success,
        has_privilege: &privilege::has_elevated_privileges,
        recheck: &|id| {
            let detector = ToolDetector::new();
            crate::toolchain::requirements()
                .iter()
                .find(|r| r.id == id)
                .map(|req| detector.detect(req).meets_minimum)
                .unwrap_or(false)
        },
    }
}

/// Record of what the installer dispatched.
#[derive(Debug, Clone, Default)]
pub struct InstallationAttempt {
    /// Commands handed to the package manager, in dispatch order.
    pub commands_run: Vec<String>,
}

/// Dispatch installation of the missing tools through the selected manager.
///
/// `manager` is `None` when no supported manager was found; that is a
/// terminal failure here regardless of the user's answer.
pub fn install(
    missing: &MissingToolSet,
    manager: Option<PackageManager>,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
) -> Result<InstallationAttempt> {
    // Gate 1: explicit affirmative confirmation.
    let question = format!(
        "Attempt to install {} missing tool(s) ({}) automatically?",
        missing.len(),
        missing
    );
    if !ui.confirm(&question, true)? {
        print_manual_instructions(missing, ui);
        return Err(TrailheadError::InstallDeclined);
    }

    // Gate 2: elevated privileges.
    if !(ctx.has_privilege)() {
        print_manual_instructions(missing, ui);
        return Err(TrailheadError::InsufficientPrivilege);
    }

    // Gate 3: a manager must exist.
    let Some(manager) = manager else {
        print_manual_instructions(missing, ui);
        return Err(TrailheadError::PackageManagerUnavailable);
    };

    let mut attempt = InstallationAttempt::default();

    for tool in missing.iter() {
        let Some(command) = manager.install_command(tool) else {
            ui.warning(&format!(
                "{} has no install template for '{}'; install it manually",
                manager.id, tool
            ));
            continue;
        };
        dispatch(&manager, &command, ui, ctx, &mut attempt);
    }

    // The compiler/build-generator pairing isn't always captured by the
    // per-tool loop; one conditional repair dispatch covers it.
    let pairing_absent =
        !(ctx.recheck)(ToolId::Cmake) || !(ctx.recheck)(ToolId::Compiler);
    if pairing_absent {
        if let Some(command) = manager.toolchain_repair_command() {
            ui.message("Build toolchain still incomplete; installing the compiler/CMake pairing");
            dispatch(&manager, &command, ui, ctx, &mut attempt);
        }
    }

    Ok(attempt)
}

fn dispatch(
    manager: &PackageManager,
    command: &str,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
    attempt: &mut InstallationAttempt,
) {
    let command = elevated_command(manager, command);
    ui.message(&format!("Running: {}", command));

    if !(ctx.run_command)(&command) {
        // Not a failure here; the verification pass decides.
        tracing::warn!("install command exited non-zero: {}", command);
    }
    attempt.commands_run.push(command);
}

/// Prefix `sudo` when the manager needs root and we aren't root.
fn elevated_command(manager: &PackageManager, command: &str) -> String {
    if cfg!(unix) && manager.needs_root() && !privilege::is_root() {
        format!("sudo {}", command)
    } else {
        command.to_string()
    }
}

/// Per-tool manual installation instructions for the current platform.
pub fn manual_install_instructions(missing: &MissingToolSet) -> Vec<String> {
    missing
        .iter()
        .map(|tool| {
            let hint = match tool {
                ToolId::Python => {
                    "install Python 3.8 or newer (python.org, or your package manager's python3)"
                }
                ToolId::Git => "install git 2.20 or newer (git-scm.com)",
                ToolId::Cmake => "install CMake 3.16 or newer (cmake.org/download)",
                ToolId::Compiler => {
                    "install a C++ compiler (g++, clang++, or the Visual Studio Build Tools)"
                }
            };
            format!("  {}: {}", tool, hint)
        })
        .collect()
}

fn print_manual_instructions(missing: &MissingToolSet, ui: &mut dyn UserInterface) {
    ui.message("Install the missing tools manually, then re-run:");
    for line in manual_install_instructions(missing) {
        ui.message(&line);
    }
}
