//! # lintreport_core
//!
//! Lint result model and report formatting.
//!
//! This crate provides:
//! - Typed lint results (`FileReport`, `Message`, `Severity`)
//! - Decoding of JSON lint results produced by an external linter
//! - The Visual Studio report formatter
//!
//! ## Example
//!
//! ```rust
//! use lintreport_core::{FileReport, Message, Severity, formatters::visualstudio};
//!
//! let reports = vec![FileReport::new(
//!     "foo.scss",
//!     vec![Message::new("foo", "Unexpected foo.", Severity::Error).at(5, 10)],
//! )];
//!
//! assert_eq!(
//!     visualstudio::format(&reports),
//!     "foo.scss(5,10): error foo : Unexpected foo.\n\n1 problem"
//! );
//! ```

mod error;
pub mod formatters;
mod input;
mod report;

pub use error::{MessageError, ReportError};
pub use formatters::{Formatter, VisualStudio};
pub use input::{parse_reports, read_reports, read_reports_from_path};
pub use report::{FileReport, Message, Severity, total_problems};
