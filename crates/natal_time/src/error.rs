//! Error types for civil time parsing and conversion.

use thiserror::Error;

/// Errors from parsing civil date, clock time, or UTC offset strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A component that must be an integer could not be parsed.
    #[error("{field} is not a number: {value:?}")]
    MalformedNumeric { field: &'static str, value: String },
    /// The string does not have the expected shape.
    #[error("{field} must look like {expected}, got {value:?}")]
    MalformedFormat {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
    /// A parsed component is outside its calendar/clock range.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
    /// Strict offset parsing failed.
    #[error("invalid UTC offset: {0:?}")]
    InvalidOffset(String),
}
