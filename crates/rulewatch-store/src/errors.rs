//! Error helpers for rulewatch-store
//!
//! Wraps rulewatch-core ExError with file-specific context

use rulewatch_core::errors::{ExError, ExErrorKind, RuleWatchError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a read-side operation
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::from(RuleWatchError::ReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
    .with_op(operation)
}

/// Create a persistence error for a write-side operation
pub fn write_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::from(RuleWatchError::WriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
    .with_op(operation)
}

/// Create an error for a file whose contents do not match the expected shape
pub fn malformed(path: &Path, err: serde_json::Error) -> ExError {
    ExError::from(RuleWatchError::MalformedFile {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
    .with_op("parse_json_file")
}

/// Create an error for a value that cannot be encoded
pub fn encode_error(path: &Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("encode_json_file")
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}
