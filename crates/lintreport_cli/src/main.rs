//! lintreport CLI
//!
//! Renders lint results produced by an external linter as a Visual Studio
//! style report.

mod cli;
mod output;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use lintreport_core::{read_reports, read_reports_from_path};
use output::output_results;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let reports = match cli.input_path() {
        Some(path) => read_reports_from_path(path).into_diagnostic()?,
        None => {
            debug!("Reading lint results from stdin");
            read_reports(io::stdin().lock()).into_diagnostic()?
        }
    };

    output_results(&reports, cli.output.as_deref())
}
