//! Parsed search terms.

/// The key portion of a `qualifier:value` search term.
///
/// Qualifier names are recognized case-insensitively by [`Qualifier::parse`].
/// Anything not in the fixed set becomes [`Qualifier::Unknown`], which is
/// data rather than an error: the compiler drops such terms so an
/// unrecognized qualifier never fails a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualifier {
    /// Free-text match against number, title and body.
    Text,
    /// Match by record key or link relation.
    Ref,
    /// Boolean `is:` predicates (`is:open`, `is:assigned`, ...).
    Is,
    /// Match by label name.
    Label,
    /// Match by `owner/name` repository form.
    Repo,
    /// Match by milestone title.
    Milestone,
    /// Match by the record author's login.
    Author,
    /// Match by assignee login.
    Assignee,
    /// Match by requested reviewer or review author login.
    Reviewer,
    /// Match by comment author login.
    Commented,
    /// Any of author, assignee, reviewer or commenter.
    Involves,
    /// Temporal match against the creation timestamp.
    Created,
    /// Temporal match against the last-update timestamp.
    Updated,
    /// A qualifier outside the recognized set.
    Unknown(String),
}

impl Qualifier {
    /// Resolves a qualifier name, case-insensitively.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "text" => Qualifier::Text,
            "ref" => Qualifier::Ref,
            "is" => Qualifier::Is,
            "label" => Qualifier::Label,
            "repo" => Qualifier::Repo,
            "milestone" => Qualifier::Milestone,
            "author" => Qualifier::Author,
            "assignee" => Qualifier::Assignee,
            "reviewer" => Qualifier::Reviewer,
            "commented" => Qualifier::Commented,
            "involves" => Qualifier::Involves,
            "created" => Qualifier::Created,
            "updated" => Qualifier::Updated,
            other => Qualifier::Unknown(other.to_string()),
        }
    }
}

/// One parsed unit of a search expression.
///
/// Produced by the [`Lexer`](crate::lexer::Lexer); immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Which qualifier the term addresses.
    pub qualifier: Qualifier,
    /// The raw value, possibly empty (`label:` with nothing after the colon).
    pub value: String,
    /// Whether the term was prefixed with `-`.
    pub negated: bool,
}

impl Term {
    /// Creates a term for the given qualifier and value.
    pub fn new(qualifier: Qualifier, value: impl Into<String>) -> Self {
        Self {
            qualifier,
            value: value.into(),
            negated: false,
        }
    }

    /// Creates a bare text term (a word without a `qualifier:` prefix).
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(Qualifier::Text, value)
    }

    /// Returns the same term with the negation flag set.
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }
}
