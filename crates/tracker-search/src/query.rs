//! Filter compiler: search expression → [`CompiledQuery`].

use tracker_model::Record;

use crate::context::SearchContext;
use crate::error::MatchResult;
use crate::lexer::Lexer;
use crate::matcher::Matcher;
use crate::term::{Qualifier, Term};

/// The value literal that stands for the acting user's login.
pub const CURRENT_USER_SENTINEL: &str = "@me";

/// A compiled search query: an ordered conjunction of matchers.
///
/// A record matches when every matcher accepts it; the empty query
/// matches everything. Compilation never fails: malformed or
/// unrecognized input degrades per term (see [`CompiledQuery::compile`]).
/// The compiled value is pure and self-contained: it borrows nothing,
/// can be cached, and can be evaluated from any number of threads.
///
/// # Example
///
/// ```
/// use tracker_search::{CompiledQuery, Evaluator, SearchContext};
///
/// let query = CompiledQuery::compile("is:open label:bug", None);
/// let records = vec![];
/// let context = SearchContext::new(&records);
/// let evaluator = Evaluator::new(&query, &context);
/// assert!(evaluator.filter_records(&records).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    matchers: Vec<Matcher>,
}

impl CompiledQuery {
    /// Compiles a search expression.
    ///
    /// `current_user` is the acting user's login, substituted wherever a
    /// term value is the literal `@me`. Per-term degradation rules:
    ///
    /// - empty value → the term is dropped (contributes always-true)
    /// - unknown qualifier → the term is dropped
    /// - `@me` with no `current_user` → the term matches nothing
    ///   (negation still applies, so `-author:@me` matches everything)
    /// - unrecognized `is:` sub-qualifier or unparseable temporal value →
    ///   the matcher is always-true, and a negated term inverts that
    pub fn compile(search: &str, current_user: Option<&str>) -> Self {
        Self::from_terms(&Lexer::new(search).tokenize(), current_user)
    }

    /// Compiles an already-tokenized term sequence.
    pub fn from_terms(terms: &[Term], current_user: Option<&str>) -> Self {
        let mut matchers = Vec::new();

        for term in terms {
            if term.value.is_empty() {
                continue;
            }
            if matches!(term.qualifier, Qualifier::Unknown(_)) {
                continue;
            }

            let matcher = match resolve_value(&term.value, current_user) {
                Some(value) => Matcher::build(&term.qualifier, value),
                // "@me" without an identity is unsatisfiable, not a no-op.
                None => Matcher::Nothing,
            };

            matchers.push(if term.negated {
                Matcher::negate(matcher)
            } else {
                matcher
            });
        }

        Self { matchers }
    }

    /// Returns true if the query matches every record.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// The compiled matchers, in term order.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Tests the full conjunction against a record.
    ///
    /// The first error aborts evaluation of the record; the
    /// [`Evaluator`](crate::evaluator::Evaluator) resolves it to "no
    /// match".
    pub fn matches(&self, record: &Record, context: &SearchContext<'_>) -> MatchResult<bool> {
        for matcher in &self.matchers {
            if !matcher.matches(record, context)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Applies the `@me` substitution rule to a term value.
fn resolve_value<'a>(value: &'a str, current_user: Option<&'a str>) -> Option<&'a str> {
    if value == CURRENT_USER_SENTINEL {
        current_user
    } else {
        Some(value)
    }
}
