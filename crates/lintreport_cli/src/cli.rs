//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// lintreport - Render lint results as a Visual Studio style report
#[derive(Parser)]
#[command(name = "lintreport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON lint results to render ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the input file, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
