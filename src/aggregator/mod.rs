//! Aggregation of per-transaction timer trees.
//!
//! This module owns the aggregate timer tree and the two ways it grows:
//! - Incorporating one transaction's timer tree
//! - Merging another, already-aggregated tree
//!
//! plus read-only metrics over the result.

pub mod incorporate;
pub mod merge;
pub mod metrics;
pub mod timer;

// Re-export main types and functions
pub use incorporate::nanos_to_micros;
pub use metrics::{flatten_timers, top_timers, TimerRow};
pub use timer::AggregateTimer;
