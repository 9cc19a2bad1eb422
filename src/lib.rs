//! Trailhead - developer-machine bootstrap orchestrator.
//!
//! Trailhead verifies that the toolchain a project's validation suite needs
//! (Python runtime, git, CMake, a C++ compiler) is present and recent enough,
//! offers to install what's missing via the host's package manager, re-verifies
//! convergence, then locates the validation entry point and hands off to it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, run configuration, and flag forwarding
//! - [`entry`] - Validation entry point discovery
//! - [`error`] - Error types and result aliases
//! - [`install`] - Package manager selection and installation dispatch
//! - [`runner`] - End-to-end run orchestration
//! - [`shell`] - External command execution and PATH lookup
//! - [`toolchain`] - Tool requirements, detection, and verification
//! - [`ui`] - Terminal output and confirmation prompts
//!
//! # Example
//!
//! ```
//! use trailhead::toolchain::{Version, extract_version};
//!
//! let version = extract_version("git version 2.43.0").unwrap();
//! assert_eq!(version, Version::new(2, 43));
//! ```

pub mod cli;
pub mod entry;
pub mod error;
pub mod install;
pub mod runner;
pub mod shell;
pub mod toolchain;
pub mod ui;

pub use error::{Result, TrailheadError};
