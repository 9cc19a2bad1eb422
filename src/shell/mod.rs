//! External command execution and PATH lookup.

pub mod command;
pub mod lookup;

pub use command::{run_capture, run_shell, CommandResult};
pub use lookup::{is_executable, parse_system_path, resolve_tool_path};

/// Check if running in a CI environment.
///
/// CI environments have no interactive terminal, so installation offers
/// are declined by default there.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("CONTINUOUS_INTEGRATION").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
}
