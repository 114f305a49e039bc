//! Evaluation context: the record store surface matchers resolve against.

use tracker_model::{Record, RecordLink};

/// Read-only view over the record collection being searched.
///
/// `ref` matchers need to resolve keys to other records and walk their
/// links; the context is that lookup surface. It borrows the record slice
/// for the duration of a search and holds no state of its own, so any
/// number of concurrent searches can share one record set.
#[derive(Debug, Clone)]
pub struct SearchContext<'a> {
    records: &'a [Record],
}

impl<'a> SearchContext<'a> {
    /// Creates a context over the given records.
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }

    /// Finds a record by key (ASCII case-insensitive).
    pub fn find_by_key(&self, key: &str) -> Option<&'a Record> {
        self.records
            .iter()
            .find(|record| record.key().eq_ignore_ascii_case(key))
    }

    /// The outgoing links of a record.
    pub fn links_of<'b>(&self, record: &'b Record) -> &'b [RecordLink] {
        record.links()
    }
}
