//! Per-transaction timer trees handed to the aggregator.
//!
//! The tracing system that records timers is not part of this crate. It is
//! consumed through the [`TransactionTimer`] trait. [`ExecutionTimer`] is the
//! concrete, JSON-backed implementation used by the CLI and the tests.

use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::Deserialize;

/// Read-only view of one timer of a single transaction
///
/// Every timer of a well-formed execution tree has a name, including the
/// top-level one. `None` is only surfaced so the aggregator can reject it.
pub trait TransactionTimer: Sized {
    fn name(&self) -> Option<&str>;

    fn is_extended(&self) -> bool;

    /// Total time spent in this timer, in nanoseconds
    fn total_nanos(&self) -> u64;

    /// Number of times the timer was entered
    fn count(&self) -> u64;

    fn nested_timers(&self) -> &[Self];
}

/// Timer tree of one transaction as produced by the tracer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionTimer {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub extended: bool,

    /// Total duration in nanoseconds
    #[serde(alias = "total", alias = "totalDurationNanos")]
    pub total_nanos: u64,

    /// Invocation count
    #[serde(alias = "invocationCount")]
    pub count: u64,

    #[serde(default)]
    pub nested_timers: Vec<ExecutionTimer>,
}

impl ExecutionTimer {
    /// Create a leaf timer
    pub fn new(name: impl Into<String>, total_nanos: u64, count: u64) -> Self {
        Self {
            name: Some(name.into()),
            extended: false,
            total_nanos,
            count,
            nested_timers: Vec::new(),
        }
    }

    pub fn extended(mut self) -> Self {
        self.extended = true;
        self
    }

    pub fn with_nested(mut self, nested: ExecutionTimer) -> Self {
        self.nested_timers.push(nested);
        self
    }
}

impl TransactionTimer for ExecutionTimer {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_extended(&self) -> bool {
        self.extended
    }

    fn total_nanos(&self) -> u64 {
        self.total_nanos
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn nested_timers(&self) -> &[Self] {
        &self.nested_timers
    }
}

/// Parse transaction timer trees from raw JSON
///
/// **Public** - main entry point for reading tracer output
///
/// Accepts either a single top-level timer object or an array of them
/// (one element per transaction).
///
/// # Errors
/// * `ParseError::InvalidFormat` - document is neither an object nor an array
/// * `ParseError::JsonError` - an element does not match the timer shape
pub fn parse_transactions(raw: &serde_json::Value) -> Result<Vec<ExecutionTimer>, ParseError> {
    let transactions = match raw {
        serde_json::Value::Object(_) => {
            debug!("Input is a single transaction timer tree");
            vec![ExecutionTimer::deserialize(raw)?]
        }
        serde_json::Value::Array(items) => items
            .iter()
            .map(ExecutionTimer::deserialize)
            .collect::<Result<Vec<_>, _>>()?,
        _ => {
            return Err(ParseError::InvalidFormat(
                "Transaction timers must be a JSON object or array".to_string(),
            ))
        }
    };

    if transactions.is_empty() {
        warn!("Input contains no transactions");
    }
    debug!("Parsed {} transaction timer trees", transactions.len());

    Ok(transactions)
}
