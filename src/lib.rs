//! Timer Rollup
//!
//! Aggregation of per-transaction timer trees into a single aggregate timer
//! tree that preserves nesting, sums durations and counts for matching
//! timers, and merges with other aggregates.
//!
//! ## Getting Started
//!
//! ```
//! use timer_rollup::aggregator::AggregateTimer;
//! use timer_rollup::parser::ExecutionTimer;
//!
//! let mut aggregate = AggregateTimer::create_synthetic_root();
//! let transaction = ExecutionTimer::new("http request", 10_000, 1)
//!     .with_nested(ExecutionTimer::new("sql", 4_000, 1));
//! aggregate.incorporate(&transaction).unwrap();
//!
//! assert_eq!(aggregate.total_micros(), 10);
//! assert_eq!(aggregate.count(), 1);
//! ```
//!
//! The `timer-rollup` CLI wraps the same operations over JSON files.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
