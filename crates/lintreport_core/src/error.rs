//! Report error types.

use thiserror::Error;

/// Errors that can occur while loading lint results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while decoding a single lint message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Severity outside the warning (1) / error (2) range.
    #[error("unknown severity {0} (expected 1 for warning or 2 for error)")]
    UnknownSeverity(i64),

    /// Required message field absent from the input or set to null.
    #[error("missing or null field `{0}`")]
    MissingField(&'static str),

    /// Fatal messages carry no position and have no agreed rendering yet.
    #[error("fatal messages are not supported")]
    FatalUnsupported,
}
