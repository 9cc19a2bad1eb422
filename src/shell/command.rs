//! Shell command execution.
//!
//! Two execution styles, matching the two kinds of external calls this
//! tool makes:
//!
//! - [`run_capture`] for version probes: direct exec of a resolved binary,
//!   output captured, never shown to the user.
//! - [`run_shell`] for install commands: a shell line run with inherited
//!   stdio so the package manager's own progress output is visible.
//!
//! Both are blocking calls with no timeout; the run is strictly sequential.

use crate::error::{Result, TrailheadError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Combined standard output and standard error.
    ///
    /// Version banners land on either stream depending on the tool (MSVC's
    /// `cl` prints to stderr), so callers get both merged.
    pub output: String,

    /// Whether the command exited 0.
    pub success: bool,
}

/// Execute a resolved binary directly with arguments, capturing output.
///
/// Returns `Err` only when the process could not be spawned; a non-zero
/// exit is a normal `CommandResult`.
pub fn run_capture(program: &Path, args: &[&str]) -> Result<CommandResult> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| TrailheadError::CommandSpawnFailed {
            command: program.display().to_string(),
            message: e.to_string(),
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CommandResult {
        exit_code: output.status.code(),
        output: combined,
        success: output.status.success(),
    })
}

/// Execute a shell command line with inherited stdio.
///
/// Used for package manager invocations where the user should see the
/// manager's own output. Returns the exit status; spawn failures map to
/// a non-success result rather than an error, since the verifier pass is
/// the authority on whether installation worked.
pub fn run_shell(command: &str) -> CommandResult {
    let (shell, flag) = if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };

    match Command::new(shell).arg(flag).arg(command).status() {
        Ok(status) => CommandResult {
            exit_code: status.code(),
            output: String::new(),
            success: status.success(),
        },
        Err(e) => {
            tracing::warn!("failed to spawn '{}': {}", command, e);
            CommandResult {
                exit_code: None,
                output: String::new(),
                success: false,
            }
        }
    }
}
