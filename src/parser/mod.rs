//! Input parsing and interchange schema definitions.
//!
//! This module handles:
//! - Parsing per-transaction timer trees from tracer JSON
//! - Decoding and validating aggregate timers from the wire format
//! - Defining the report file envelope

pub mod execution;
pub mod schema;

// Re-export main types
pub use execution::{parse_transactions, ExecutionTimer, TransactionTimer};
pub use schema::{decode_aggregate, AggregateReport, AggregateTimerRecord};
