//! Temporal filters for `created:` / `updated:` qualifiers.
//!
//! A temporal value encodes an optional comparator followed by a date:
//! `>2023-03-01`, `<=2024-01-01`, or a full RFC 3339 timestamp. A value
//! without a comparator parses to [`TemporalOp::Unbounded`], which matches
//! every record regardless of the date: `created:2023-01-01` is a no-op
//! filter, not a same-day match.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// The comparator of a temporal filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalOp {
    /// `>`: strictly after the filter date.
    After,
    /// `>=`: at or after the filter date.
    AtOrAfter,
    /// `<`: strictly before the filter date.
    Before,
    /// `<=`: at or before the filter date.
    AtOrBefore,
    /// No comparator given; matches unconditionally.
    Unbounded,
}

/// A parsed temporal filter: comparator plus normalized UTC date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalFilter {
    /// The filter date, normalized to UTC.
    pub date: DateTime<Utc>,
    /// How record timestamps compare against [`date`](Self::date).
    pub op: TemporalOp,
}

impl TemporalFilter {
    /// Parses a temporal value string.
    ///
    /// Returns `None` if the date portion is unparseable; the owning
    /// matcher degrades to always-true in that case rather than failing
    /// the whole search.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        let (op, rest) = if let Some(rest) = value.strip_prefix(">=") {
            (TemporalOp::AtOrAfter, rest)
        } else if let Some(rest) = value.strip_prefix("<=") {
            (TemporalOp::AtOrBefore, rest)
        } else if let Some(rest) = value.strip_prefix('>') {
            (TemporalOp::After, rest)
        } else if let Some(rest) = value.strip_prefix('<') {
            (TemporalOp::Before, rest)
        } else {
            (TemporalOp::Unbounded, value)
        };

        let date = parse_date(rest.trim())?;
        Some(Self { date, op })
    }

    /// Applies the comparator to an already-parsed record timestamp.
    pub fn matches(&self, timestamp: DateTime<Utc>) -> bool {
        match self.op {
            TemporalOp::After => timestamp > self.date,
            TemporalOp::AtOrAfter => timestamp >= self.date,
            TemporalOp::Before => timestamp < self.date,
            TemporalOp::AtOrBefore => timestamp <= self.date,
            TemporalOp::Unbounded => true,
        }
    }
}

/// Parses a date as `YYYY-MM-DD` (midnight UTC) or full RFC 3339.
fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(input: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(input)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_parse_after() {
        let filter = TemporalFilter::parse(">2023-03-01").unwrap();
        assert_eq!(filter.op, TemporalOp::After);
        assert_eq!(filter.date, utc("2023-03-01T00:00:00Z"));
    }

    #[test]
    fn test_parse_at_or_after() {
        let filter = TemporalFilter::parse(">=2023-03-01").unwrap();
        assert_eq!(filter.op, TemporalOp::AtOrAfter);
    }

    #[test]
    fn test_parse_before_and_at_or_before() {
        assert_eq!(
            TemporalFilter::parse("<2023-03-01").unwrap().op,
            TemporalOp::Before
        );
        assert_eq!(
            TemporalFilter::parse("<=2023-03-01").unwrap().op,
            TemporalOp::AtOrBefore
        );
    }

    #[test]
    fn test_parse_bare_date_is_unbounded() {
        let filter = TemporalFilter::parse("2023-03-01").unwrap();
        assert_eq!(filter.op, TemporalOp::Unbounded);
    }

    #[test]
    fn test_parse_rfc3339_value() {
        let filter = TemporalFilter::parse(">2023-03-01T12:30:00Z").unwrap();
        assert_eq!(filter.date, utc("2023-03-01T12:30:00Z"));
    }

    #[test]
    fn test_parse_invalid_returns_none() {
        assert!(TemporalFilter::parse("garbage").is_none());
        assert!(TemporalFilter::parse(">garbage").is_none());
        assert!(TemporalFilter::parse(">=2023-13-99").is_none());
        assert!(TemporalFilter::parse("").is_none());
        assert!(TemporalFilter::parse(">").is_none());
    }

    #[test]
    fn test_matches_after() {
        let filter = TemporalFilter::parse(">2023-03-01").unwrap();
        assert!(filter.matches(utc("2023-06-01T00:00:00Z")));
        assert!(!filter.matches(utc("2023-01-01T00:00:00Z")));
        // Boundary: strictly after, midnight itself does not match.
        assert!(!filter.matches(utc("2023-03-01T00:00:00Z")));
        assert!(filter.matches(utc("2023-03-01T00:00:01Z")));
    }

    #[test]
    fn test_matches_at_or_after_boundary() {
        let filter = TemporalFilter::parse(">=2023-03-01").unwrap();
        assert!(filter.matches(utc("2023-03-01T00:00:00Z")));
        assert!(!filter.matches(utc("2023-02-28T23:59:59Z")));
    }

    #[test]
    fn test_matches_before_boundaries() {
        let before = TemporalFilter::parse("<2023-03-01").unwrap();
        assert!(before.matches(utc("2023-02-28T23:59:59Z")));
        assert!(!before.matches(utc("2023-03-01T00:00:00Z")));

        let at_or_before = TemporalFilter::parse("<=2023-03-01").unwrap();
        assert!(at_or_before.matches(utc("2023-03-01T00:00:00Z")));
        assert!(!at_or_before.matches(utc("2023-03-01T00:00:01Z")));
    }

    #[test]
    fn test_unbounded_matches_everything() {
        let filter = TemporalFilter::parse("2023-03-01").unwrap();
        assert!(filter.matches(utc("1970-01-01T00:00:00Z")));
        assert!(filter.matches(utc("2999-12-31T23:59:59Z")));
    }
}
