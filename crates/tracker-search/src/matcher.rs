//! Per-qualifier matchers.
//!
//! [`Matcher`] is the dispatch table of the engine: one variant per
//! qualifier semantics, constructed from a term's value by
//! [`Matcher::build`] and applied to records through [`Matcher::matches`].
//! String comparisons are case-insensitive throughout; whether a matcher
//! uses substring containment or prefix matching is part of each
//! qualifier's contract and intentionally differs between them.

use chrono::{DateTime, Utc};
use tracker_model::{Record, State, User};

use crate::context::SearchContext;
use crate::error::{MatchError, MatchResult};
use crate::temporal::TemporalFilter;
use crate::term::Qualifier;

/// A compiled per-record predicate for one search term.
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    // ==================== Degenerate Matchers ====================
    /// Matches every record.
    Any,

    /// Matches no record (`@me` with no acting user).
    Nothing,

    // ==================== Content Matchers ====================
    /// Case-insensitive substring match against `#<number> <title>\n\n<body>`.
    Text(String),

    /// Matches by record key or by link relation (either direction).
    Reference(String),

    /// Any label name contains the value.
    Label(String),

    /// The `owner/name` repository form contains the value.
    Repo(String),

    /// A milestone is present and its title starts with the value.
    Milestone(String),

    // ==================== `is:` Predicates ====================
    /// The assignee list is non-empty.
    Assigned,

    /// The assignee list is empty.
    Unassigned,

    /// The record is in the given state.
    State(State),

    /// The record is an issue.
    IssueOnly,

    /// The record is a pull request.
    PullRequestOnly,

    /// A milestone is present.
    Milestoned,

    /// The record is not a child of anything (no `child-of`/`closes` link).
    Epic,

    // ==================== People Matchers ====================
    /// The record author's login starts with the value.
    Author(String),

    /// Any assignee login starts with the value.
    Assignee(String),

    /// A requested reviewer or review author login starts with the value.
    Reviewer(String),

    /// Any comment author login starts with the value.
    Commented(String),

    /// Any of author, assignee, reviewer or commenter.
    Involves(String),

    // ==================== Temporal Matchers ====================
    /// Temporal comparison against the creation timestamp.
    Created(TemporalFilter),

    /// Temporal comparison against the last-update timestamp.
    Updated(TemporalFilter),

    // ==================== Combinators ====================
    /// Logical NOT of another matcher. Evaluation errors pass through
    /// un-flipped, so a failing record is excluded under both a term and
    /// its negation.
    Not(Box<Matcher>),
}

impl Matcher {
    /// The registry: resolves a qualifier and value to a matcher.
    ///
    /// The value must be non-empty and already `@me`-substituted; the
    /// compiler handles both before dispatching here. Unrecognized `is:`
    /// sub-qualifiers and unparseable temporal values degrade to
    /// [`Matcher::Any`] rather than erroring.
    pub fn build(qualifier: &Qualifier, value: &str) -> Matcher {
        match qualifier {
            Qualifier::Text => Matcher::Text(value.to_lowercase()),
            Qualifier::Ref => Matcher::Reference(value.to_string()),
            Qualifier::Is => Self::build_is(value),
            Qualifier::Label => Matcher::Label(value.to_lowercase()),
            Qualifier::Repo => Matcher::Repo(value.to_lowercase()),
            Qualifier::Milestone => Matcher::Milestone(value.to_lowercase()),
            Qualifier::Author => Matcher::Author(value.to_lowercase()),
            Qualifier::Assignee => Matcher::Assignee(value.to_lowercase()),
            Qualifier::Reviewer => Matcher::Reviewer(value.to_lowercase()),
            Qualifier::Commented => Matcher::Commented(value.to_lowercase()),
            Qualifier::Involves => Matcher::Involves(value.to_lowercase()),
            Qualifier::Created => Self::build_temporal(value, Matcher::Created),
            Qualifier::Updated => Self::build_temporal(value, Matcher::Updated),
            Qualifier::Unknown(_) => Matcher::Any,
        }
    }

    /// Resolves an `is:` sub-qualifier.
    fn build_is(value: &str) -> Matcher {
        match value.to_lowercase().as_str() {
            "assigned" => Matcher::Assigned,
            "unassigned" => Matcher::Unassigned,
            "open" => Matcher::State(State::Open),
            "closed" => Matcher::State(State::Closed),
            "issue" => Matcher::IssueOnly,
            "pull" => Matcher::PullRequestOnly,
            "milestoned" => Matcher::Milestoned,
            "epic" => Matcher::Epic,
            // Unrecognized sub-qualifiers are permissive.
            _ => Matcher::Any,
        }
    }

    /// Resolves a temporal value; unparseable values are permissive.
    fn build_temporal(value: &str, wrap: fn(TemporalFilter) -> Matcher) -> Matcher {
        match TemporalFilter::parse(value) {
            Some(filter) => wrap(filter),
            None => Matcher::Any,
        }
    }

    /// Wraps a matcher in logical NOT.
    pub fn negate(inner: Matcher) -> Matcher {
        Matcher::Not(Box::new(inner))
    }

    /// Tests the matcher against a record.
    ///
    /// Errors are per-record data problems (today: malformed timestamps)
    /// and are resolved at the evaluator boundary, never surfaced to the
    /// search caller.
    pub fn matches(&self, record: &Record, context: &SearchContext<'_>) -> MatchResult<bool> {
        match self {
            Matcher::Any => Ok(true),
            Matcher::Nothing => Ok(false),

            Matcher::Text(needle) => {
                let haystack = format!(
                    "#{} {}\n\n{}",
                    record.number(),
                    record.title(),
                    record.body()
                )
                .to_lowercase();
                Ok(haystack.contains(needle))
            }

            Matcher::Reference(key) => Ok(matches_reference(record, context, key)),

            Matcher::Label(needle) => Ok(record
                .labels()
                .iter()
                .any(|label| label.name.to_lowercase().contains(needle))),

            Matcher::Repo(needle) => {
                Ok(record.repo().to_string().to_lowercase().contains(needle))
            }

            Matcher::Milestone(prefix) => Ok(record
                .milestone()
                .is_some_and(|m| m.title.to_lowercase().starts_with(prefix))),

            Matcher::Assigned => Ok(!record.assignees().is_empty()),
            Matcher::Unassigned => Ok(record.assignees().is_empty()),
            Matcher::State(state) => Ok(record.state() == *state),
            Matcher::IssueOnly => Ok(!record.is_pull_request()),
            Matcher::PullRequestOnly => Ok(record.is_pull_request()),
            Matcher::Milestoned => Ok(record.milestone().is_some()),
            Matcher::Epic => Ok(!context
                .links_of(record)
                .iter()
                .any(|link| link.is_parented())),

            Matcher::Author(prefix) => Ok(author_matches(record, prefix)),
            Matcher::Assignee(prefix) => Ok(assignee_matches(record, prefix)),
            Matcher::Reviewer(prefix) => Ok(reviewer_matches(record, prefix)),
            Matcher::Commented(prefix) => Ok(commented_matches(record, prefix)),
            Matcher::Involves(prefix) => Ok(author_matches(record, prefix)
                || assignee_matches(record, prefix)
                || reviewer_matches(record, prefix)
                || commented_matches(record, prefix)),

            Matcher::Created(filter) => {
                let timestamp = parse_timestamp(record, "created_at", record.created_at())?;
                Ok(filter.matches(timestamp))
            }
            Matcher::Updated(filter) => {
                let timestamp = parse_timestamp(record, "updated_at", record.updated_at())?;
                Ok(filter.matches(timestamp))
            }

            Matcher::Not(inner) => Ok(!inner.matches(record, context)?),
        }
    }
}

/// Case-insensitive login prefix test.
fn login_starts_with(user: &User, prefix: &str) -> bool {
    user.login.to_lowercase().starts_with(prefix)
}

fn author_matches(record: &Record, prefix: &str) -> bool {
    record
        .user()
        .is_some_and(|user| login_starts_with(user, prefix))
}

fn assignee_matches(record: &Record, prefix: &str) -> bool {
    record
        .assignees()
        .iter()
        .any(|user| login_starts_with(user, prefix))
}

/// False on issues: the variant has no reviewer capability.
fn reviewer_matches(record: &Record, prefix: &str) -> bool {
    let requested = record.requested_reviewers().is_some_and(|reviewers| {
        reviewers
            .iter()
            .any(|user| login_starts_with(user, prefix))
    });
    let reviewed = record.reviews().is_some_and(|reviews| {
        reviews
            .iter()
            .any(|review| login_starts_with(&review.author, prefix))
    });
    requested || reviewed
}

fn commented_matches(record: &Record, prefix: &str) -> bool {
    record
        .comments()
        .iter()
        .any(|comment| login_starts_with(&comment.author, prefix))
}

/// A record is referenced by a key if it *is* that record, links to it,
/// or is linked from it.
fn matches_reference(record: &Record, context: &SearchContext<'_>, key: &str) -> bool {
    if record.key().eq_ignore_ascii_case(key) {
        return true;
    }

    if context
        .links_of(record)
        .iter()
        .any(|link| link.target.eq_ignore_ascii_case(key))
    {
        return true;
    }

    context.find_by_key(key).is_some_and(|other| {
        context
            .links_of(other)
            .iter()
            .any(|link| link.target.eq_ignore_ascii_case(record.key()))
    })
}

/// Parses a record-side RFC 3339 timestamp, attributing failures to the record.
fn parse_timestamp(record: &Record, field: &str, value: &str) -> MatchResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| MatchError::invalid_timestamp(record.key(), field, value))
}
