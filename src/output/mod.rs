//! Output writers for aggregate reports.
//!
//! This module handles getting aggregates in and out of files:
//! - JSON reports (write and read back)
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_report, read_transactions, report_to_string, write_report};
pub use summary::{generate_text_summary, generate_tree_summary};
