//! Decoding of JSON lint results.
//!
//! The input is the linter's result array:
//! `[{ "filePath": ..., "messages": [{ "ruleId", "severity", "message", "line", "column" }] }]`.
//! Extra fields such as `errorCount`/`warningCount` are ignored; counts are
//! always derived from the messages themselves.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::ReportError;
use crate::report::{FileReport, total_problems};

/// Parses lint results from a JSON string.
pub fn parse_reports(json: &str) -> Result<Vec<FileReport>, ReportError> {
    let reports: Vec<FileReport> = serde_json::from_str(json)?;
    log_decoded(&reports);
    Ok(reports)
}

/// Reads lint results from any reader (e.g. stdin).
pub fn read_reports(reader: impl Read) -> Result<Vec<FileReport>, ReportError> {
    let reports: Vec<FileReport> = serde_json::from_reader(BufReader::new(reader))?;
    log_decoded(&reports);
    Ok(reports)
}

/// Reads lint results from a JSON file.
pub fn read_reports_from_path(path: &Path) -> Result<Vec<FileReport>, ReportError> {
    debug!("Reading lint results from {}", path.display());
    let file = File::open(path)?;
    read_reports(file)
}

fn log_decoded(reports: &[FileReport]) {
    debug!(
        "Decoded {} file report(s) with {} problem(s)",
        reports.len(),
        total_problems(reports)
    );
}
