use crate::utils::config::{DEFAULT_REPORT_PATH, DEFAULT_TOP_TIMERS};
use std::path::PathBuf;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Tracer JSON files, each holding one transaction or an array of them
    pub inputs: Vec<PathBuf>,

    /// Output path for the aggregate report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of heaviest timers shown in the summary
    pub top_timers: usize,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_json: PathBuf::from(DEFAULT_REPORT_PATH),
            print_summary: false,
            top_timers: DEFAULT_TOP_TIMERS,
        }
    }
}

/// Arguments for the merge command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct MergeArgs {
    /// Aggregate reports to combine, merged in this order
    pub inputs: Vec<PathBuf>,

    /// Output path for the merged report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of heaviest timers shown in the summary
    pub top_timers: usize,
}

impl Default for MergeArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_json: PathBuf::from(DEFAULT_REPORT_PATH),
            print_summary: false,
            top_timers: DEFAULT_TOP_TIMERS,
        }
    }
}
