//! Validation entry point discovery.

pub mod locator;

pub use locator::{locate, locate_from, ResolvedEntry, ENTRY_PATTERNS, MAX_SEARCH_DEPTH};
