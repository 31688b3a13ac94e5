//! JSON report writer and reader.
//!
//! Writes `AggregateReport` structs to JSON files with proper formatting and
//! reads them back through the validating decode path.

use crate::parser::execution::{parse_transactions, ExecutionTimer};
use crate::parser::schema::AggregateReport;
use crate::utils::error::OutputError;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &AggregateReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing aggregate report to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a report to a pretty JSON string (for tests or stdout)
pub fn report_to_string(report: &AggregateReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a report from a JSON file
///
/// **Public** - used by merge and validate
///
/// The embedded aggregate goes through the interchange decode rules, so a
/// missing `count`, a null nested timer, an anonymous nested timer, or two
/// siblings with the same key all fail here. A named root timer loads with a
/// warning.
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse or decode error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<AggregateReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let report: AggregateReport =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} transactions",
        report.version, report.transaction_count
    );
    if let Some(name) = report.root_timer.name() {
        warn!(
            "Report {} has a named root timer '{}'; it will merge as a subtree, not as a synthetic root",
            input_path.display(),
            name
        );
    }

    Ok(report)
}

/// Read transaction timer trees from a tracer JSON file
///
/// **Public** - input side of the aggregate command
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - File is not JSON
/// * `OutputError::Decode` - JSON does not hold transaction timer trees
pub fn read_transactions(input_path: impl AsRef<Path>) -> Result<Vec<ExecutionTimer>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading transactions from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let raw: serde_json::Value =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    Ok(parse_transactions(&raw)?)
}
