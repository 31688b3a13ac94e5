//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod aggregate;
pub mod merge;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use aggregate::{execute_aggregate, validate_aggregate_args};
pub use merge::{execute_merge, validate_merge_args};
pub use models::{AggregateArgs, MergeArgs};
pub use utils::{display_schema, display_version, validate_report_file};
