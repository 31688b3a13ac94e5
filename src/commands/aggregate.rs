//! Aggregate command implementation.
//!
//! The aggregate command:
//! 1. Reads transaction timer trees from each input file
//! 2. Incorporates every transaction into one aggregate
//! 3. Writes the aggregate report
//! 4. Optionally prints a text summary

use super::models::AggregateArgs;
use super::utils::print_summary;
use crate::aggregator::AggregateTimer;
use crate::output::{read_transactions, write_report};
use crate::parser::schema::AggregateReport;
use crate::utils::config::MAX_TOP_TIMERS;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed input files
/// * Transactions containing anonymous timers
/// * File write errors
pub fn execute_aggregate(args: AggregateArgs) -> Result<AggregateReport> {
    let start_time = Instant::now();

    info!("Aggregating {} input file(s)", args.inputs.len());

    let mut root = AggregateTimer::create_synthetic_root();
    let mut transaction_count: u64 = 0;

    for (i, input) in args.inputs.iter().enumerate() {
        info!("Step 1/2: Reading {} ({}/{})", input.display(), i + 1, args.inputs.len());
        let transactions = read_transactions(input)
            .with_context(|| format!("Failed to read transactions from {}", input.display()))?;

        for (index, transaction) in transactions.iter().enumerate() {
            root.incorporate(transaction).with_context(|| {
                format!(
                    "Failed to incorporate transaction #{} of {}",
                    index,
                    input.display()
                )
            })?;
        }
        transaction_count += transactions.len() as u64;
        debug!("{} transactions incorporated so far", transaction_count);
    }

    if transaction_count == 0 {
        warn!("No transactions found; writing an empty aggregate");
    }

    info!("Step 2/2: Writing aggregate report...");
    let report = AggregateReport::new(root, transaction_count);
    write_report(&report, &args.output_json).context("Failed to write aggregate report")?;

    info!("✓ Aggregate written to: {}", args.output_json.display());

    if args.print_summary {
        print_summary(&report, args.top_timers);
    }

    let elapsed = start_time.elapsed();
    info!(
        "Aggregated {} transactions in {:.2}s",
        transaction_count,
        elapsed.as_secs_f64()
    );

    Ok(report)
}

/// Validate aggregate arguments
///
/// **Public** - can be called before execute_aggregate for early validation
pub fn validate_aggregate_args(args: &AggregateArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one input file is required");
    }

    for input in &args.inputs {
        if !input.is_file() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
    }

    validate_top_timers(args.top_timers)
}

pub(crate) fn validate_top_timers(top_timers: usize) -> Result<()> {
    if top_timers == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if top_timers > MAX_TOP_TIMERS {
        anyhow::bail!("top is too large (max {})", MAX_TOP_TIMERS);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::read_report;
    use std::path::PathBuf;

    fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_validate_args_valid() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "tx.json", "[]");
        let args = AggregateArgs {
            inputs: vec![input],
            ..Default::default()
        };

        assert!(validate_aggregate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_no_inputs() {
        assert!(validate_aggregate_args(&AggregateArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = AggregateArgs {
            inputs: vec![PathBuf::from("/nonexistent/transactions.json")],
            ..Default::default()
        };

        assert!(validate_aggregate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_timers_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "tx.json", "[]");

        for top_timers in [0, MAX_TOP_TIMERS + 1] {
            let args = AggregateArgs {
                inputs: vec![input.clone()],
                top_timers,
                ..Default::default()
            };
            assert!(validate_aggregate_args(&args).is_err());
        }
    }

    #[test]
    fn test_execute_aggregate_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_input(
            &dir,
            "a.json",
            r#"{"name": "request", "totalNanos": 10000, "count": 1,
                "nestedTimers": [{"name": "sql", "totalNanos": 4000, "count": 1}]}"#,
        );
        let second = write_input(
            &dir,
            "b.json",
            r#"[{"name": "request", "totalNanos": 12000, "count": 1,
                 "nestedTimers": [{"name": "sql", "totalNanos": 6000, "count": 1}]}]"#,
        );
        let output = dir.path().join("out/aggregate.json");
        let args = AggregateArgs {
            inputs: vec![first, second],
            output_json: output.clone(),
            ..Default::default()
        };

        let report = execute_aggregate(args).unwrap();

        assert_eq!(report.transaction_count, 2);
        assert_eq!(report.root_timer.total_micros(), 22);
        assert_eq!(read_report(&output).unwrap(), report);
    }

    #[test]
    fn test_execute_aggregate_rejects_anonymous_timer() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            "bad.json",
            r#"{"name": "request", "totalNanos": 1000, "count": 1,
                "nestedTimers": [{"totalNanos": 1000, "count": 1}]}"#,
        );
        let output = dir.path().join("aggregate.json");
        let args = AggregateArgs {
            inputs: vec![input],
            output_json: output.clone(),
            ..Default::default()
        };

        assert!(execute_aggregate(args).is_err());
        assert!(!output.exists());
    }
}
