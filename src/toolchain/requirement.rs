//! The toolchain requirement registry.
//!
//! One immutable [`ToolRequirement`] per tool kind the validation suite
//! needs: the Python runtime that runs it, git, CMake, and a C++ compiler.
//! Minimums reflect what the suite itself assumes (f-strings and
//! `capture_output` need Python 3.8; CMake's `-S`/`-B` split needs 3.16+).

use super::version::Version;
use std::fmt;

/// Identifier for a tool kind in the toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Python runtime (runs the validation suite).
    Python,
    /// Version-control client.
    Git,
    /// Build-system generator.
    Cmake,
    /// Native C++ compiler.
    Compiler,
}

impl ToolId {
    /// Short identifier used in messages and install templates.
    pub fn name(self) -> &'static str {
        match self {
            ToolId::Python => "python",
            ToolId::Git => "git",
            ToolId::Cmake => "cmake",
            ToolId::Compiler => "compiler",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate executable name for a tool, with its version query.
#[derive(Debug, Clone, Copy)]
pub struct ToolCandidate {
    /// Executable name looked up on PATH.
    pub name: &'static str,
    /// Arguments that make it report its version. MSVC's `cl` prints its
    /// banner when invoked bare, so this can be empty.
    pub version_args: &'static [&'static str],
}

/// A named tool plus its minimum acceptable version and detection rule.
#[derive(Debug, Clone, Copy)]
pub struct ToolRequirement {
    pub id: ToolId,
    /// Candidate executables in priority order. A present-but-too-old
    /// candidate does not stop the search.
    pub candidates: &'static [ToolCandidate],
    pub minimum: Version,
    /// Whether to also consult the vendor installation locator (Visual
    /// Studio's) when no PATH candidate satisfies the minimum.
    pub vendor_fallback: bool,
}

const VERSION_FLAG: &[&str] = &["--version"];

/// The full, fixed requirement set, in reporting order.
pub const REQUIREMENTS: &[ToolRequirement] = &[
    ToolRequirement {
        id: ToolId::Python,
        candidates: &[
            ToolCandidate {
                name: "python3",
                version_args: VERSION_FLAG,
            },
            ToolCandidate {
                name: "python",
                version_args: VERSION_FLAG,
            },
        ],
        minimum: Version::new(3, 8),
        vendor_fallback: false,
    },
    ToolRequirement {
        id: ToolId::Git,
        candidates: &[ToolCandidate {
            name: "git",
            version_args: VERSION_FLAG,
        }],
        minimum: Version::new(2, 20),
        vendor_fallback: false,
    },
    ToolRequirement {
        id: ToolId::Cmake,
        candidates: &[ToolCandidate {
            name: "cmake",
            version_args: VERSION_FLAG,
        }],
        minimum: Version::new(3, 16),
        vendor_fallback: true,
    },
    ToolRequirement {
        id: ToolId::Compiler,
        candidates: &[
            ToolCandidate {
                name: "g++",
                version_args: VERSION_FLAG,
            },
            ToolCandidate {
                name: "clang++",
                version_args: VERSION_FLAG,
            },
            ToolCandidate {
                name: "cl",
                version_args: &[],
            },
        ],
        // Any MSVC recent enough to be installed by current tooling reports
        // 19.x, so a single numeric floor covers all three candidates.
        minimum: Version::new(9, 0),
        vendor_fallback: true,
    },
];

/// The full requirement set.
pub fn requirements() -> &'static [ToolRequirement] {
    REQUIREMENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_all_tool_kinds() {
        let ids: Vec<ToolId> = requirements().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            [ToolId::Python, ToolId::Git, ToolId::Cmake, ToolId::Compiler]
        );
    }

    #[test]
    fn python_prefers_python3_candidate() {
        let python = &requirements()[0];
        assert_eq!(python.candidates[0].name, "python3");
        assert_eq!(python.candidates[1].name, "python");
    }

    #[test]
    fn only_build_tools_use_vendor_fallback() {
        for req in requirements() {
            let expected = matches!(req.id, ToolId::Cmake | ToolId::Compiler);
            assert_eq!(req.vendor_fallback, expected, "{}", req.id);
        }
    }

    #[test]
    fn cl_candidate_queries_version_with_bare_invocation() {
        let compiler = requirements()
            .iter()
            .find(|r| r.id == ToolId::Compiler)
            .unwrap();
        let cl = compiler.candidates.iter().find(|c| c.name == "cl").unwrap();
        assert!(cl.version_args.is_empty());
    }

    #[test]
    fn tool_ids_display_as_short_names() {
        assert_eq!(ToolId::Python.to_string(), "python");
        assert_eq!(ToolId::Compiler.to_string(), "compiler");
    }
}
