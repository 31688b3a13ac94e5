//! Merge command implementation.
//!
//! Loads aggregate reports and folds them, in argument order, into an empty
//! aggregate with `merge_from`. Transaction counts are summed.

use super::aggregate::validate_top_timers;
use super::models::MergeArgs;
use super::utils::print_summary;
use crate::aggregator::AggregateTimer;
use crate::output::{read_report, write_report};
use crate::parser::schema::AggregateReport;
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the merge command
///
/// **Public** - main entry point called from main.rs
pub fn execute_merge(args: MergeArgs) -> Result<AggregateReport> {
    info!("Merging {} aggregate report(s)", args.inputs.len());

    let mut root = AggregateTimer::create_synthetic_root();
    let mut transaction_count: u64 = 0;

    for input in &args.inputs {
        let report = read_report(input)
            .with_context(|| format!("Failed to read aggregate report {}", input.display()))?;
        debug!(
            "Loaded {} (schema {}, {} transactions)",
            input.display(),
            report.version,
            report.transaction_count
        );

        transaction_count = transaction_count.saturating_add(report.transaction_count);
        root.merge_from(report.root_timer)
            .with_context(|| format!("Failed to merge {}", input.display()))?;
    }

    let report = AggregateReport::new(root, transaction_count);
    write_report(&report, &args.output_json).context("Failed to write merged report")?;

    info!("✓ Merged report written to: {}", args.output_json.display());

    if args.print_summary {
        print_summary(&report, args.top_timers);
    }

    Ok(report)
}

/// Validate merge arguments
pub fn validate_merge_args(args: &MergeArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one aggregate report is required");
    }

    for input in &args.inputs {
        if !input.is_file() {
            anyhow::bail!("Report file does not exist: {}", input.display());
        }
    }

    validate_top_timers(args.top_timers)
}
