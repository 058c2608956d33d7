//! Output utilities for the CLI
//!
//! Success summaries, dry-run previews, and rich error messages with
//! hints for the common ways a propagation run fails.

pub mod errors;
pub mod summary;

pub use errors::{show_paths_error, show_sync_error};
pub use summary::{print_dry_run, print_summary};
