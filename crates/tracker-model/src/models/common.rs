//! Leaf model types shared by issues and pull requests.
//!
//! These types mirror the shapes delivered by the tracker's sync layer,
//! so they stay close to the wire format: thin structs, string keys, and
//! permissive serde defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user account, identified by login name.
///
/// # Example
///
/// ```
/// use tracker_model::User;
///
/// let user = User::new("alice");
/// assert_eq!(user.login, "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The login name of the user.
    pub login: String,
}

impl User {
    /// Creates a user from a login name.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

/// A label attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The label name as shown in the tracker (e.g. "bug", "help wanted").
    pub name: String,
}

impl Label {
    /// Creates a label from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A milestone a record is planned for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// The milestone title (e.g. "v1.0").
    pub title: String,
}

impl Milestone {
    /// Creates a milestone from a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A comment left on a record.
///
/// Only the author is carried: the search engine matches commenters, not
/// comment bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// The user who wrote the comment.
    pub author: User,
}

/// A review submitted on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// The user who submitted the review.
    pub author: User,
}

/// The kind of relation a [`RecordLink`] expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    /// This record is a child of the target (the target is its epic).
    ChildOf,
    /// This record closes the target when it completes.
    Closes,
    /// This record blocks the target.
    Blocks,
    /// Informational relation with no hierarchy semantics.
    RelatesTo,
}

/// A directed link from the owning record to another record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLink {
    /// The relation kind.
    #[serde(rename = "type")]
    pub link_type: LinkType,
    /// The key of the record this link points at (e.g. "org/repo#5").
    pub target: String,
}

impl RecordLink {
    /// Creates a link of the given kind to a target key.
    pub fn new(link_type: LinkType, target: impl Into<String>) -> Self {
        Self {
            link_type,
            target: target.into(),
        }
    }

    /// Returns true if this link makes the owning record a child of
    /// something (a `child-of` or `closes` relation).
    pub fn is_parented(&self) -> bool {
        matches!(self.link_type, LinkType::ChildOf | LinkType::Closes)
    }
}

/// The repository a record belongs to.
///
/// Displays as `owner/name`, the form users type into `repo:` searches.
///
/// # Example
///
/// ```
/// use tracker_model::RepoId;
///
/// let repo = RepoId::new("acme", "widgets");
/// assert_eq!(repo.to_string(), "acme/widgets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoId {
    /// The owning organization or user.
    pub owner: String,
    /// The repository name.
    pub name: String,
}

impl RepoId {
    /// Creates a repository id from owner and name.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
