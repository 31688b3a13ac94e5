use crate::output::{generate_text_summary, generate_tree_summary, read_report};
use crate::parser::schema::AggregateReport;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Print the tree and the heaviest timers of a report to stdout
pub fn print_summary(report: &AggregateReport, top_timers: usize) {
    println!("\n{}", "=".repeat(80));
    println!("AGGREGATE SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Transactions: {}", report.transaction_count);
    println!("Total:        {} us", report.root_timer.total_micros());
    println!("Timers:       {}", report.root_timer.node_count().saturating_sub(1));
    println!("\n{}", generate_tree_summary(&report.root_timer));
    println!("\n{}", generate_text_summary(&report.root_timer, top_timers));
    println!("{}", "=".repeat(80));
}

/// Validate an aggregate report file
pub fn validate_report_file(file_path: impl AsRef<Path>) -> Result<AggregateReport> {
    let file_path = file_path.as_ref();
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid aggregate report");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Transactions: {}", report.transaction_count);
    println!("  Root Total: {} us", report.root_timer.total_micros());
    println!("  Root Count: {}", report.root_timer.count());
    println!("  Timers: {}", report.root_timer.node_count().saturating_sub(1));

    Ok(report)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Timer Rollup Aggregate Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  generatedAt: string       - RFC 3339 timestamp");
        println!("  transactionCount: number  - Transactions folded into the aggregate");
        println!("  rootTimer: object         - Aggregate timer tree");
        println!("    name: string?           - Timer name (null only for the root)");
        println!("    extended: boolean       - Extended flag (default false)");
        println!("    totalMicros: number     - Accumulated duration (required)");
        println!("    count: number           - Accumulated occurrences (required)");
        println!("    nestedTimers: array     - Nested timers (default empty, no nulls)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Timer Rollup v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregation of per-transaction timer trees into mergeable aggregates.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::AggregateTimer;
    use crate::output::write_report;

    #[test]
    fn test_validate_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregate.json");
        let report = AggregateReport::new(AggregateTimer::create_synthetic_root(), 0);
        write_report(&report, &path).unwrap();

        assert_eq!(validate_report_file(&path).unwrap(), report);
    }

    #[test]
    fn test_validate_report_file_rejects_null_nested_timer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregate.json");
        std::fs::write(
            &path,
            r#"{"version": "1.0.0", "generatedAt": "2026-01-01T00:00:00Z", "transactionCount": 0,
                "rootTimer": {"totalMicros": 0, "count": 0, "nestedTimers": [null]}}"#,
        )
        .unwrap();

        assert!(validate_report_file(&path).is_err());
    }
}
