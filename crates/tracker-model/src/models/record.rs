//! Record types: issues, pull requests, and the tagged union over both.
//!
//! Issues and pull requests share most of their shape; the handful of
//! pull-only fields (reviewers, reviews, draft/merged flags) exist only on
//! the [`PullRequest`] variant. Code that needs a shared field goes
//! through the accessors on [`Record`]; code that needs a pull-only field
//! gets an `Option` back and must handle the issue case.

use serde::{Deserialize, Serialize};

use super::common::{Comment, Label, Milestone, RecordLink, RepoId, Review, User};

/// Whether a record is open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// The record is open.
    Open,
    /// The record is closed (or merged, for pull requests).
    Closed,
}

/// A tracked issue.
///
/// Timestamps are kept as RFC 3339 strings, exactly as delivered by the
/// sync layer; they are parsed on demand where date semantics are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// The unique identifier assigned by the tracker.
    pub id: String,

    /// The human-facing key, `owner/repo#number`.
    pub key: String,

    /// The number within the repository.
    pub number: u64,

    /// Open/closed state.
    pub state: State,

    /// The title line.
    pub title: String,

    /// The free-text body (Markdown). Empty if the record has none.
    #[serde(default)]
    pub body: String,

    /// Creation timestamp, RFC 3339.
    pub created_at: String,

    /// Last-update timestamp, RFC 3339.
    pub updated_at: String,

    /// The repository the record belongs to.
    pub repo: RepoId,

    /// The user who opened the record, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Assigned users.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<User>,

    /// The milestone the record is planned for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,

    /// Labels attached to the record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,

    /// Comments left on the record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,

    /// Outgoing links to other records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<RecordLink>,
}

/// A tracked pull request.
///
/// Carries everything an [`Issue`] does plus review-related fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    /// The unique identifier assigned by the tracker.
    pub id: String,

    /// The human-facing key, `owner/repo#number`.
    pub key: String,

    /// The number within the repository.
    pub number: u64,

    /// Open/closed state.
    pub state: State,

    /// The title line.
    pub title: String,

    /// The free-text body (Markdown). Empty if the record has none.
    #[serde(default)]
    pub body: String,

    /// Creation timestamp, RFC 3339.
    pub created_at: String,

    /// Last-update timestamp, RFC 3339.
    pub updated_at: String,

    /// The repository the record belongs to.
    pub repo: RepoId,

    /// The user who opened the record, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Assigned users.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<User>,

    /// The milestone the record is planned for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,

    /// Labels attached to the record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,

    /// Comments left on the record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,

    /// Outgoing links to other records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<RecordLink>,

    /// Users whose review has been requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested_reviewers: Vec<User>,

    /// Reviews submitted so far.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,

    /// Whether the pull request is a draft.
    #[serde(default)]
    pub draft: bool,

    /// Whether the pull request has been merged.
    #[serde(default)]
    pub merged: bool,
}

/// A tracked work item: an issue or a pull request.
///
/// The variant tag travels on the wire as `"type": "issue"` or
/// `"type": "pull_request"`. Shared fields are reached through the
/// accessor methods; pull-only fields come back as `Option`, `None` on the
/// issue variant.
///
/// # Example
///
/// ```
/// use tracker_model::{Issue, Record, RepoId, State};
///
/// let record = Record::Issue(Issue {
///     id: "1".to_string(),
///     key: "acme/widgets#7".to_string(),
///     number: 7,
///     state: State::Open,
///     title: "Crash on empty input".to_string(),
///     body: String::new(),
///     created_at: "2024-01-01T00:00:00Z".to_string(),
///     updated_at: "2024-01-02T00:00:00Z".to_string(),
///     repo: RepoId::new("acme", "widgets"),
///     user: None,
///     assignees: vec![],
///     milestone: None,
///     labels: vec![],
///     comments: vec![],
///     links: vec![],
/// });
///
/// assert_eq!(record.key(), "acme/widgets#7");
/// assert!(!record.is_pull_request());
/// assert!(record.reviews().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// An issue.
    Issue(Issue),
    /// A pull request.
    PullRequest(PullRequest),
}

impl Record {
    /// The tracker-assigned identifier.
    pub fn id(&self) -> &str {
        match self {
            Record::Issue(issue) => &issue.id,
            Record::PullRequest(pr) => &pr.id,
        }
    }

    /// The human-facing key, `owner/repo#number`.
    pub fn key(&self) -> &str {
        match self {
            Record::Issue(issue) => &issue.key,
            Record::PullRequest(pr) => &pr.key,
        }
    }

    /// The number within the repository.
    pub fn number(&self) -> u64 {
        match self {
            Record::Issue(issue) => issue.number,
            Record::PullRequest(pr) => pr.number,
        }
    }

    /// Open/closed state.
    pub fn state(&self) -> State {
        match self {
            Record::Issue(issue) => issue.state,
            Record::PullRequest(pr) => pr.state,
        }
    }

    /// The title line.
    pub fn title(&self) -> &str {
        match self {
            Record::Issue(issue) => &issue.title,
            Record::PullRequest(pr) => &pr.title,
        }
    }

    /// The free-text body.
    pub fn body(&self) -> &str {
        match self {
            Record::Issue(issue) => &issue.body,
            Record::PullRequest(pr) => &pr.body,
        }
    }

    /// Creation timestamp, RFC 3339.
    pub fn created_at(&self) -> &str {
        match self {
            Record::Issue(issue) => &issue.created_at,
            Record::PullRequest(pr) => &pr.created_at,
        }
    }

    /// Last-update timestamp, RFC 3339.
    pub fn updated_at(&self) -> &str {
        match self {
            Record::Issue(issue) => &issue.updated_at,
            Record::PullRequest(pr) => &pr.updated_at,
        }
    }

    /// The repository the record belongs to.
    pub fn repo(&self) -> &RepoId {
        match self {
            Record::Issue(issue) => &issue.repo,
            Record::PullRequest(pr) => &pr.repo,
        }
    }

    /// The user who opened the record, if known.
    pub fn user(&self) -> Option<&User> {
        match self {
            Record::Issue(issue) => issue.user.as_ref(),
            Record::PullRequest(pr) => pr.user.as_ref(),
        }
    }

    /// Assigned users.
    pub fn assignees(&self) -> &[User] {
        match self {
            Record::Issue(issue) => &issue.assignees,
            Record::PullRequest(pr) => &pr.assignees,
        }
    }

    /// The milestone the record is planned for, if any.
    pub fn milestone(&self) -> Option<&Milestone> {
        match self {
            Record::Issue(issue) => issue.milestone.as_ref(),
            Record::PullRequest(pr) => pr.milestone.as_ref(),
        }
    }

    /// Labels attached to the record.
    pub fn labels(&self) -> &[Label] {
        match self {
            Record::Issue(issue) => &issue.labels,
            Record::PullRequest(pr) => &pr.labels,
        }
    }

    /// Comments left on the record.
    pub fn comments(&self) -> &[Comment] {
        match self {
            Record::Issue(issue) => &issue.comments,
            Record::PullRequest(pr) => &pr.comments,
        }
    }

    /// Outgoing links to other records.
    pub fn links(&self) -> &[RecordLink] {
        match self {
            Record::Issue(issue) => &issue.links,
            Record::PullRequest(pr) => &pr.links,
        }
    }

    /// Returns true if this record is a pull request.
    pub fn is_pull_request(&self) -> bool {
        matches!(self, Record::PullRequest(_))
    }

    /// Users whose review has been requested. `None` on issues, which
    /// have no review capability at all.
    pub fn requested_reviewers(&self) -> Option<&[User]> {
        match self {
            Record::Issue(_) => None,
            Record::PullRequest(pr) => Some(&pr.requested_reviewers),
        }
    }

    /// Reviews submitted so far. `None` on issues.
    pub fn reviews(&self) -> Option<&[Review]> {
        match self {
            Record::Issue(_) => None,
            Record::PullRequest(pr) => Some(&pr.reviews),
        }
    }
}
