//! Report output

use std::fs;
use std::path::Path;

use lintreport_core::{FileReport, Formatter, VisualStudio};
use miette::{IntoDiagnostic, Result};
use tracing::info;

/// Renders the reports and writes them to `destination`, or stdout.
///
/// Returns true if any message has error severity.
pub fn output_results(reports: &[FileReport], destination: Option<&Path>) -> Result<bool> {
    let has_errors = reports.iter().any(|r| r.has_errors());
    let rendered = VisualStudio.format(reports);

    match destination {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered)).into_diagnostic()?;
            info!("Wrote report to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(has_errors)
}
