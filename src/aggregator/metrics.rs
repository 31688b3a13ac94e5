//! Read-side metrics over an aggregate timer tree.
//!
//! The tree is flattened into one row per node, keyed by the path of timer
//! names from the root. Rows are what summaries and "top timers" listings
//! are built from.

use super::timer::AggregateTimer;
use crate::utils::config::EXTENDED_SUFFIX;
use log::debug;

/// One flattened aggregate timer
#[derive(Debug, Clone, PartialEq)]
pub struct TimerRow {
    /// Timer names from the top-level timer down, joined with '/'
    pub path: String,

    /// Depth below the synthetic root (top-level timers are at 1)
    pub depth: usize,

    pub total_micros: u64,

    pub count: u64,

    /// Mean microseconds per occurrence, 0 when count is 0
    pub average_micros: u64,

    /// Share of the root total
    pub percentage: f64,
}

/// Flatten an aggregate into rows, depth-first, parents first
///
/// **Public** - main entry point for metrics calculation
///
/// The root itself is not emitted when it is the synthetic root; its totals
/// are the 100% reference for every row.
pub fn flatten_timers(root: &AggregateTimer) -> Vec<TimerRow> {
    let mut rows = Vec::new();
    let mut path = Vec::new();
    let reference = root.total_micros();

    if root.is_synthetic_root() {
        for nested in root.nested_timers() {
            flatten_into(nested, 1, reference, &mut path, &mut rows);
        }
    } else {
        flatten_into(root, 1, reference, &mut path, &mut rows);
    }

    debug!("Flattened aggregate into {} timer rows", rows.len());
    rows
}

fn flatten_into(
    timer: &AggregateTimer,
    depth: usize,
    reference: u64,
    path: &mut Vec<String>,
    rows: &mut Vec<TimerRow>,
) {
    path.push(display_name(timer));
    rows.push(TimerRow {
        path: path.join("/"),
        depth,
        total_micros: timer.total_micros(),
        count: timer.count(),
        average_micros: average_micros(timer),
        percentage: percentage_of(timer.total_micros(), reference),
    });

    for nested in timer.nested_timers() {
        flatten_into(nested, depth + 1, reference, path, rows);
    }
    path.pop();
}

/// Rows with the largest totals, descending
///
/// **Public** - analogue of a "hot paths" listing
pub fn top_timers(root: &AggregateTimer, top_n: usize) -> Vec<TimerRow> {
    let mut rows = flatten_timers(root);
    rows.sort_by(|a, b| b.total_micros.cmp(&a.total_micros));
    rows.truncate(top_n);
    rows
}

/// Name as shown to humans, extended timers marked
pub fn display_name(timer: &AggregateTimer) -> String {
    let name = timer.label();
    if timer.is_extended() {
        format!("{}{}", name, EXTENDED_SUFFIX)
    } else {
        name.to_string()
    }
}

/// Mean duration per occurrence
pub fn average_micros(timer: &AggregateTimer) -> u64 {
    if timer.count() > 0 {
        timer.total_micros() / timer.count()
    } else {
        0
    }
}

fn percentage_of(value: u64, reference: u64) -> f64 {
    if reference > 0 {
        (value as f64 / reference as f64) * 100.0
    } else {
        0.0
    }
}
