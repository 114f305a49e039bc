//! Query evaluation against records.
//!
//! The evaluator is the fail-soft boundary of the engine: a per-record
//! evaluation error (a malformed timestamp, say) excludes that record and
//! is reported through `tracing`, instead of failing the whole search.
//! One bad record never breaks filtering for the rest of the collection.

use tracker_model::Record;

use crate::context::SearchContext;
use crate::error::MatchResult;
use crate::query::CompiledQuery;

/// Evaluates a compiled query against records.
///
/// # Example
///
/// ```
/// use tracker_search::{CompiledQuery, Evaluator, SearchContext};
///
/// let query = CompiledQuery::compile("is:open", None);
/// let records = vec![];
/// let context = SearchContext::new(&records);
///
/// let evaluator = Evaluator::new(&query, &context);
/// let open: Vec<_> = evaluator.filter_records(&records);
/// assert!(open.is_empty());
/// ```
#[derive(Debug)]
pub struct Evaluator<'a> {
    query: &'a CompiledQuery,
    context: &'a SearchContext<'a>,
}

impl<'a> Evaluator<'a> {
    /// Creates a new evaluator.
    pub fn new(query: &'a CompiledQuery, context: &'a SearchContext<'a>) -> Self {
        Self { query, context }
    }

    /// Returns true if the record matches the query.
    ///
    /// Evaluation errors resolve to `false` and are reported with the
    /// record's key; they never propagate to the caller. Callers that
    /// need the error itself use [`matches_checked`](Self::matches_checked).
    pub fn matches(&self, record: &Record) -> bool {
        match self.query.matches(record, self.context) {
            Ok(matched) => matched,
            Err(error) => {
                tracing::warn!(key = record.key(), %error, "record excluded from search");
                false
            }
        }
    }

    /// Like [`matches`](Self::matches), but surfaces per-record errors
    /// instead of collapsing them.
    pub fn matches_checked(&self, record: &Record) -> MatchResult<bool> {
        self.query.matches(record, self.context)
    }

    /// Filters a slice of records, returning only those that match.
    pub fn filter_records<'b>(&self, records: &'b [Record]) -> Vec<&'b Record> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}
