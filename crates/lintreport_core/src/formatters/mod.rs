//! Report formatters.

pub mod visualstudio;

pub use visualstudio::VisualStudio;

use crate::report::FileReport;

/// Renders lint results as a single block of text.
pub trait Formatter {
    /// Short identifier of the output format.
    fn name(&self) -> &'static str;

    /// Renders the reports in order.
    fn format(&self, reports: &[FileReport]) -> String;
}
