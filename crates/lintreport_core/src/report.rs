//! Lint result types.
//!
//! These mirror the per-file result objects emitted by the linter: a file path
//! plus the ordered messages found in that file. Field names follow the
//! linter's camelCase JSON shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MessageError;

/// Severity level of a lint message.
///
/// Encoded as an integer on the wire: `1` for warnings, `2` for errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Severity {
    /// Warning - should be reviewed.
    Warning,
    /// Error - must be fixed.
    Error,
}

impl Severity {
    /// Returns the word used for this severity in text reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for Severity {
    type Error = MessageError;

    fn try_from(value: i64) -> Result<Self, MessageError> {
        match value {
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(MessageError::UnknownSeverity(other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMessage")]
pub struct Message {
    /// The rule that produced this message.
    pub rule_id: String,

    /// Severity level.
    pub severity: Severity,

    /// Human-readable message text.
    pub message: String,

    /// Line number (1-indexed).
    pub line: u32,

    /// Column number (1-indexed).
    pub column: u32,
}

impl Message {
    /// Creates a message positioned at line 1, column 1.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            line: 1,
            column: 1,
        }
    }

    /// Sets the source position.
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Returns true if this message is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Wire shape of a message before validation.
///
/// Everything except `fatal` is optional here so that fatal messages, which
/// carry neither a position nor a severity, are reported as such instead of
/// as a missing field.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMessage {
    rule_id: Option<String>,
    severity: Option<i64>,
    message: Option<String>,
    line: Option<u32>,
    column: Option<u32>,
    #[serde(default)]
    fatal: bool,
}

impl TryFrom<RawMessage> for Message {
    type Error = MessageError;

    fn try_from(raw: RawMessage) -> Result<Self, MessageError> {
        // Extension point: a fatal variant would be built here once the
        // `file(0): error : message` rendering is settled.
        if raw.fatal {
            return Err(MessageError::FatalUnsupported);
        }

        Ok(Self {
            rule_id: raw.rule_id.ok_or(MessageError::MissingField("ruleId"))?,
            severity: Severity::try_from(
                raw.severity.ok_or(MessageError::MissingField("severity"))?,
            )?,
            message: raw.message.ok_or(MessageError::MissingField("message"))?,
            line: raw.line.ok_or(MessageError::MissingField("line"))?,
            column: raw.column.ok_or(MessageError::MissingField("column"))?,
        })
    }
}

/// Lint results for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Path of the linted file, rendered verbatim.
    pub file_path: String,

    /// Messages found in the file, in reporting order.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl FileReport {
    /// Creates a new file report.
    pub fn new(file_path: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            file_path: file_path.into(),
            messages,
        }
    }

    /// Returns the number of error-severity messages.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Returns the number of warning-severity messages.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(Message::is_error)
    }

    fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .count()
    }
}

/// Total number of messages across all reports.
pub fn total_problems(reports: &[FileReport]) -> usize {
    reports.iter().map(|r| r.messages.len()).sum()
}
