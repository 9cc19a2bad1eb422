//! Elevated-privilege checks.
//!
//! Installation is gated on being able to actually perform system package
//! installs: either the process already runs as root/administrator, or a
//! non-interactive `sudo` is available (cached credentials or NOPASSWD).

use crate::shell::run_shell;

/// Whether the current process runs as root.
#[cfg(unix)]
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Root in the unix sense doesn't exist on Windows.
#[cfg(not(unix))]
pub fn is_root() -> bool {
    false
}

/// Whether elevated privileges are available for installation.
#[cfg(unix)]
pub fn has_elevated_privileges() -> bool {
    if is_root() {
        return true;
    }
    // -n fails instead of prompting, so this never blocks on a password.
    run_shell("sudo -n true 2>/dev/null").success
}

/// On Windows, `net session` succeeds only in an elevated shell.
#[cfg(not(unix))]
pub fn has_elevated_privileges() -> bool {
    run_shell("net session >nul 2>&1").success
}
