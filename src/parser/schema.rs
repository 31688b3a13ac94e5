//! Interchange schema for aggregate timer trees.
//!
//! This module defines the structure of aggregates as they cross a process
//! or storage boundary, and the envelope of report files we write to disk.
//!
//! Wire shape of one timer:
//!
//! ```text
//! { "name": "sql" | null, "extended": false, "totalMicros": 10,
//!   "count": 2, "nestedTimers": [ ... ] }
//! ```
//!
//! On read, `totalMicros` and `count` are mandatory, `extended` defaults to
//! `false`, `nestedTimers` defaults to empty, and a `null` entry inside
//! `nestedTimers` is malformed. Only the outermost timer may lack a name,
//! and siblings may not share a `(name, extended)` pair.
//! On write all five fields are always emitted.

use crate::aggregator::AggregateTimer;
use crate::utils::config::{SCHEMA_VERSION, SYNTHETIC_ROOT_LABEL};
use crate::utils::error::ParseError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Aggregate timer exactly as found on the wire, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateTimerRecord {
    pub name: Option<String>,
    pub extended: Option<bool>,
    pub total_micros: Option<u64>,
    pub count: Option<u64>,
    pub nested_timers: Option<Vec<Option<AggregateTimerRecord>>>,
}

impl TryFrom<AggregateTimerRecord> for AggregateTimer {
    type Error = ParseError;

    fn try_from(record: AggregateTimerRecord) -> Result<Self, Self::Error> {
        decode(record, None)
    }
}

/// Validate one record and its nested records
///
/// `parent` is the enclosing timer's label, `None` for the outermost record.
fn decode(record: AggregateTimerRecord, parent: Option<&str>) -> Result<AggregateTimer, ParseError> {
    if let (Some(parent), None) = (parent, &record.name) {
        return Err(ParseError::AnonymousTimer {
            parent: parent.to_string(),
        });
    }
    let total_micros = record
        .total_micros
        .ok_or(ParseError::MissingField("totalMicros"))?;
    let count = record.count.ok_or(ParseError::MissingField("count"))?;

    let label = record.name.as_deref().unwrap_or(SYNTHETIC_ROOT_LABEL);
    let nested_timers = record
        .nested_timers
        .unwrap_or_default()
        .into_iter()
        .map(|nested| match nested {
            Some(nested) => decode(nested, Some(label)),
            None => Err(ParseError::NullNestedTimer {
                parent: label.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    check_unique_siblings(&nested_timers, label)?;

    Ok(AggregateTimer::from_parts(
        record.name,
        record.extended.unwrap_or(false),
        total_micros,
        count,
        nested_timers,
    ))
}

/// Reject two siblings sharing one `(name, extended)` key
fn check_unique_siblings(nested_timers: &[AggregateTimer], parent: &str) -> Result<(), ParseError> {
    for (index, nested) in nested_timers.iter().enumerate() {
        let name = nested.name().unwrap_or_default();
        if nested_timers[..index]
            .iter()
            .any(|earlier| earlier.matches(name, nested.is_extended()))
        {
            return Err(ParseError::DuplicateTimer {
                parent: parent.to_string(),
                name: name.to_string(),
                extended: nested.is_extended(),
            });
        }
    }
    Ok(())
}

/// Decode an aggregate timer tree from a JSON string
///
/// **Public** - convenience wrapper around the serde decode path
pub fn decode_aggregate(json: &str) -> Result<AggregateTimer, ParseError> {
    let record: AggregateTimerRecord = serde_json::from_str(json)?;
    AggregateTimer::try_from(record)
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Number of transactions folded into `root_timer`
    pub transaction_count: u64,

    /// The aggregate itself, in interchange shape
    pub root_timer: AggregateTimer,
}

impl AggregateReport {
    /// Wrap an aggregate in a freshly stamped report
    pub fn new(root_timer: AggregateTimer, transaction_count: u64) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            transaction_count,
            root_timer,
        }
    }
}
