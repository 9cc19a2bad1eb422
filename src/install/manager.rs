//! Package manager probing and install-command templates.
//!
//! Selection is purely observational: probe the platform's managers in a
//! fixed priority order and take the first one whose executable resolves.
//! The order is strict and total, so the same set of installed managers
//! always selects the same manager. Exactly one manager is used per run.

use crate::shell::lookup::parse_system_path;
use crate::shell::resolve_tool_path;
use crate::toolchain::ToolId;
use std::fmt;

/// Identifier for a supported package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerId {
    AptGet,
    Dnf,
    Brew,
    MacPorts,
    Winget,
    Chocolatey,
    Scoop,
}

impl ManagerId {
    /// The executable probed for on PATH.
    pub fn executable(self) -> &'static str {
        match self {
            ManagerId::AptGet => "apt-get",
            ManagerId::Dnf => "dnf",
            ManagerId::Brew => "brew",
            ManagerId::MacPorts => "port",
            ManagerId::Winget => "winget",
            ManagerId::Chocolatey => "choco",
            ManagerId::Scoop => "scoop",
        }
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// The selected package manager for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManager {
    pub id: ManagerId,
}

impl PackageManager {
    /// The non-interactive install command for a tool, if this manager
    /// can provide it.
    pub fn install_command(&self, tool: ToolId) -> Option<String> {
        let cmd = match (self.id, tool) {
            (ManagerId::AptGet, ToolId::Python) => "apt-get install -y python3",
            (ManagerId::AptGet, ToolId::Git) => "apt-get install -y git",
            (ManagerId::AptGet, ToolId::Cmake) => "apt-get install -y cmake",
            (ManagerId::AptGet, ToolId::Compiler) => "apt-get install -y g++",

            (ManagerId::Dnf, ToolId::Python) => "dnf install -y python3",
            (ManagerId::Dnf, ToolId::Git) => "dnf install -y git",
            (ManagerId::Dnf, ToolId::Cmake) => "dnf install -y cmake",
            (ManagerId::Dnf, ToolId::Compiler) => "dnf install -y gcc-c++",

            (ManagerId::Brew, ToolId::Python) => "brew install python",
            (ManagerId::Brew, ToolId::Git) => "brew install git",
            (ManagerId::Brew, ToolId::Cmake) => "brew install cmake",
            // Homebrew's gcc isn't the system toolchain; the Xcode CLT
            // installer is what actually provides a usable clang++.
            (ManagerId::Brew, ToolId::Compiler) => "xcode-select --install",

            (ManagerId::MacPorts, ToolId::Python) => "port -N install python312",
            (ManagerId::MacPorts, ToolId::Git) => "port -N install git",
            (ManagerId::MacPorts, ToolId::Cmake) => "port -N install cmake",
            (ManagerId::MacPorts, ToolId::Compiler) => "xcode-select --install",

            (ManagerId::Winget, ToolId::Python) => {
                "winget install -e --id Python.Python.3.12 --silent"
            }
            (ManagerId::Winget, ToolId::Git) => "winget install -e --id Git.Git --silent",
            (ManagerId::Winget, ToolId::Cmake) => "winget install -e --id Kitware.CMake --silent",
            (ManagerId::Winget, ToolId::Compiler) => {
                "winget install -e --id Microsoft.VisualStudio.2022.BuildTools --silent"
            }

            (ManagerId::Chocolatey, ToolId::Python) => "choco install -y python",
            (ManagerId::Chocolatey, ToolId::Git) => "choco install -y git",
            (ManagerId::Chocolatey, ToolId::Cmake) => "choco install -y cmake",
            (ManagerId::Chocolatey, ToolId::Compiler) => {
                "choco install -y visualstudio2022buildtools"
            }

            (ManagerId::Scoop, ToolId::Python) => "scoop install python",
            (ManagerId::Scoop, ToolId::Git) => "scoop install git",
            (ManagerId::Scoop, ToolId::Cmake) => "scoop install cmake",
            (ManagerId::Scoop, ToolId::Compiler) => "scoop install gcc",
        };
        Some(cmd.to_string())
    }

    /// Combined command for the compiler/build-generator pairing.
    ///
    /// The per-tool loop doesn't always capture this pairing (a distro's
    /// compiler metapackage also pulls in make and friends), so it gets one
    /// conditional dispatch after the loop when either half is still absent.
    pub fn toolchain_repair_command(&self) -> Option<String> {
        let cmd = match self.id {
            ManagerId::AptGet => "apt-get install -y build-essential cmake",
            ManagerId::Dnf => "dnf install -y gcc-c++ make cmake",
            ManagerId::Brew => "brew install cmake && xcode-select --install",
            ManagerId::MacPorts => "port -N install cmake && xcode-select --install",
            ManagerId::Winget => {
                "winget install -e --id Microsoft.VisualStudio.2022.BuildTools --silent"
            }
            ManagerId::Chocolatey => "choco install -y visualstudio2022buildtools cmake",
            ManagerId::Scoop => "scoop install gcc cmake",
        };
        Some(cmd.to_string())
    }

    /// Whether this manager's install commands must run as root.
    pub fn needs_root(&self) -> bool {
        matches!(
            self.id,
            ManagerId::AptGet | ManagerId::Dnf | ManagerId::MacPorts
        )
    }
}

/// The fixed probe order for the current platform: the OS-native manager
/// first, community managers after.
pub fn platform_priority() -> &'static [ManagerId] {
    if cfg!(target_os = "macos") {
        &[ManagerId::Brew, ManagerId::MacPorts]
    } else if cfg!(target_os = "windows") {
        &[ManagerId::Winget, ManagerId::Chocolatey, ManagerId::Scoop]
    } else {
        &[ManagerId::AptGet, ManagerId::Dnf, ManagerId::Brew]
    }
}

/// Probe for a package manager using an injected availability check.
///
/// Probing is sequential over a strict order, so ties cannot occur.
pub fn select_manager_with(
    priority: &[ManagerId],
    available: &dyn Fn(&str) -> bool,
) -> Option<PackageManager> {
    priority
        .iter()
        .copied()
        .find(|id| available(id.executable()))
        .map(|id| PackageManager { id })
}

/// Probe the host for the highest-priority available package manager.
pub fn select_manager() -> Option<PackageManager> {
    let path = parse_system_path();
    select_manager_with(platform_priority(), &|exe| {
        resolve_tool_path(exe, &path).is_some()
    })
}
