//! Command-line interface and run configuration.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`forward`] - Run configuration and the forwarded-argument list

pub mod args;
pub mod forward;

pub use args::Cli;
pub use forward::{ForwardedArgs, RunConfig};
