//! Error types for search evaluation.

use thiserror::Error;

/// A specialized Result type for per-record match evaluation.
pub type MatchResult<T> = Result<T, MatchError>;

/// Errors that can occur while evaluating a matcher against a record.
///
/// These never reach the public boolean surface: the
/// [`Evaluator`](crate::evaluator::Evaluator) collapses them to "no match"
/// and reports them through the diagnostic sink.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// A record carried a timestamp the temporal matcher could not parse.
    #[error("record '{key}': invalid {field} timestamp '{value}'")]
    InvalidTimestamp {
        /// The key of the offending record.
        key: String,
        /// Which timestamp field was malformed (`created_at` / `updated_at`).
        field: String,
        /// The unparseable value.
        value: String,
    },
}

impl MatchError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(
        key: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        MatchError::InvalidTimestamp {
            key: key.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}
