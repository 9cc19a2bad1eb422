//! Error types for Trailhead operations.
//!
//! This module defines [`TrailheadError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is terminal for the run; there is no degraded-mode
//!   continuation past a failed phase
//! - Each variant's message must be actionable (manual install steps, the
//!   full list of searched paths, or usage text are printed alongside)
//! - Use `anyhow::Error` (via `TrailheadError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Trailhead operations.
#[derive(Debug, Error)]
pub enum TrailheadError {
    /// No supported package manager was found on the host.
    #[error("No supported package manager found; install the missing tools manually")]
    PackageManagerUnavailable,

    /// The user declined the installation offer.
    #[error("Installation declined; install the missing tools manually and re-run")]
    InstallDeclined,

    /// Installation needs elevated privileges that are not available.
    #[error("Insufficient privileges to install packages; re-run with elevation or install manually")]
    InsufficientPrivilege,

    /// Tools remain missing after the post-install verification pass.
    #[error("Toolchain verification failed; still missing: {remaining}")]
    VerificationFailed { remaining: String },

    /// No validation entry point exists at any searched location.
    #[error("Validation entry point not found (searched from {cwd})")]
    EntryPointNotFound { cwd: PathBuf },

    /// Failed to launch an external command.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Trailhead operations.
pub type Result<T> = std::result::Result<T, TrailheadError>;
