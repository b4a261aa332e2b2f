//! Visual Studio output formatter.
//!
//! Emits one `file(line,col): severity rule : message` line per message,
//! which Visual Studio and compatible editors pick up as clickable build
//! output, followed by a blank line and the problem count.

use super::Formatter;
use crate::report::{FileReport, Message};

/// Output when there is nothing to report.
const NO_PROBLEMS: &str = "no problems";

/// Visual Studio formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualStudio;

impl Formatter for VisualStudio {
    fn name(&self) -> &'static str {
        "visualstudio"
    }

    fn format(&self, reports: &[FileReport]) -> String {
        format(reports)
    }
}

/// Renders all messages of all reports, in order, followed by the summary.
pub fn format(reports: &[FileReport]) -> String {
    let lines: Vec<String> = reports
        .iter()
        .flat_map(|report| {
            report
                .messages
                .iter()
                .map(move |msg| format_message(&report.file_path, msg))
        })
        .collect();

    if lines.is_empty() {
        return NO_PROBLEMS.to_string();
    }

    format!("{}\n\n{}", lines.join("\n"), problem_count(lines.len()))
}

fn format_message(file_path: &str, msg: &Message) -> String {
    format!(
        "{}({},{}): {} {} : {}",
        file_path, msg.line, msg.column, msg.severity, msg.rule_id, msg.message
    )
}

fn problem_count(count: usize) -> String {
    if count == 1 {
        "1 problem".to_string()
    } else {
        format!("{} problems", count)
    }
}
