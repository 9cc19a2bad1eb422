//! End-to-end run orchestration.

pub mod orchestrator;
pub mod validator;

pub use orchestrator::{run, run_default, Collaborators};
pub use validator::{existing_report_paths, invoke, validate_project_layout, REPORT_ARTIFACTS};
