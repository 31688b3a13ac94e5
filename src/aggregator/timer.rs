//! The aggregate timer tree.
//!
//! An aggregate starts as an anonymous synthetic root with zero totals.
//! Transactions are folded in with [`AggregateTimer::incorporate`] and
//! partial aggregates are combined with [`AggregateTimer::merge_from`].
//!
//! Nested timers are identified by their `(name, extended)` pair among
//! siblings, never by position. Only the synthetic root has no name.

use crate::parser::schema::AggregateTimerRecord;
use crate::utils::config::SYNTHETIC_ROOT_LABEL;
use log::debug;
use serde::{Deserialize, Serialize};

/// One node of an aggregate timer tree
///
/// Each node exclusively owns its nested timers. Totals only ever grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AggregateTimerRecord")]
pub struct AggregateTimer {
    // only None for the synthetic root
    pub(crate) name: Option<String>,
    pub(crate) extended: bool,
    pub(crate) total_micros: u64,
    pub(crate) count: u64,
    pub(crate) nested_timers: Vec<AggregateTimer>,
}

impl Default for AggregateTimer {
    fn default() -> Self {
        Self::create_synthetic_root()
    }
}

impl AggregateTimer {
    /// Create an empty aggregate: anonymous root, zero totals, no nested timers
    pub fn create_synthetic_root() -> Self {
        Self {
            name: None,
            extended: false,
            total_micros: 0,
            count: 0,
            nested_timers: Vec::new(),
        }
    }

    /// Create an empty named timer, ready to accumulate
    pub(crate) fn empty(name: impl Into<String>, extended: bool) -> Self {
        Self {
            name: Some(name.into()),
            extended,
            total_micros: 0,
            count: 0,
            nested_timers: Vec::new(),
        }
    }

    /// Assemble an already-aggregated node (used by the decoder)
    pub(crate) fn from_parts(
        name: Option<String>,
        extended: bool,
        total_micros: u64,
        count: u64,
        nested_timers: Vec<AggregateTimer>,
    ) -> Self {
        Self {
            name,
            extended,
            total_micros,
            count,
            nested_timers,
        }
    }

    /// Timer name, `None` only for the synthetic root
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Accumulated duration in microseconds
    pub fn total_micros(&self) -> u64 {
        self.total_micros
    }

    /// Number of occurrences folded into this timer
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Nested timers in first-seen order
    pub fn nested_timers(&self) -> &[AggregateTimer] {
        &self.nested_timers
    }

    pub fn is_synthetic_root(&self) -> bool {
        self.name.is_none()
    }

    /// Look up a direct nested timer by its identity key
    pub fn find_nested_timer(&self, name: &str, extended: bool) -> Option<&AggregateTimer> {
        self.matching_position(name, extended)
            .map(|index| &self.nested_timers[index])
    }

    /// Label used in logs and error messages
    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(SYNTHETIC_ROOT_LABEL)
    }

    pub(crate) fn matches(&self, name: &str, extended: bool) -> bool {
        self.extended == extended && self.name.as_deref() == Some(name)
    }

    /// Position of the first nested timer with this identity key
    ///
    /// Linear scan in insertion order, exact equality, first match wins.
    pub(crate) fn matching_position(&self, name: &str, extended: bool) -> Option<usize> {
        self.nested_timers
            .iter()
            .position(|nested| nested.matches(name, extended))
    }

    pub(crate) fn add(&mut self, total_micros: u64, count: u64) {
        self.total_micros = self.total_micros.saturating_add(total_micros);
        self.count = self.count.saturating_add(count);
    }

    /// Depth-first visit of every node, parents before children
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a AggregateTimer, usize),
    {
        self.walk_at(0, visit);
    }

    fn walk_at<'a, F>(&'a self, depth: usize, visit: &mut F)
    where
        F: FnMut(&'a AggregateTimer, usize),
    {
        visit(self, depth);
        for nested in &self.nested_timers {
            nested.walk_at(depth + 1, visit);
        }
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        let mut nodes = 0;
        self.walk(&mut |_, _| nodes += 1);
        nodes
    }
}

/// Find the nested timer matching `(name, extended)` or append an empty one
///
/// Returns the index of the match in `nested_timers`.
pub(crate) fn match_or_append(parent: &mut AggregateTimer, name: &str, extended: bool) -> usize {
    match parent.matching_position(name, extended) {
        Some(index) => index,
        None => {
            debug!(
                "New timer '{}' (extended: {}) under '{}'",
                name,
                extended,
                parent.label()
            );
            parent.nested_timers.push(AggregateTimer::empty(name, extended));
            parent.nested_timers.len() - 1
        }
    }
}
