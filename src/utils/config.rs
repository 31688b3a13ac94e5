//! Configuration and constants for aggregation and the CLI.

/// Execution timers report nanoseconds; aggregates accumulate microseconds
/// so that long aggregation windows stay far from `u64` rollover.
pub const NANOS_PER_MICRO: u64 = 1_000;

/// Current report envelope schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default output path for aggregate reports
pub const DEFAULT_REPORT_PATH: &str = "aggregate.json";

/// Default number of timers shown in text summaries
pub const DEFAULT_TOP_TIMERS: usize = 10;
pub const MAX_TOP_TIMERS: usize = 1000;

// Label used in errors and summaries for the anonymous root
pub const SYNTHETIC_ROOT_LABEL: &str = "<root>";

/// Suffix appended to extended timers in flattened paths and summaries
pub const EXTENDED_SUFFIX: &str = " (extended)";
