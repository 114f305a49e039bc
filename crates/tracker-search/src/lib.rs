//! Search expression engine for tracked issues and pull requests.
//!
//! This crate compiles a free-text search expression into a predicate over
//! [`Record`](tracker_model::Record)s and evaluates it against an in-memory
//! collection, fail-soft: malformed input degrades per term and malformed
//! records are excluded per record, so a search always produces a result.
//!
//! # Supported Syntax
//!
//! A search expression is a sequence of whitespace-separated terms. Every
//! term may be prefixed with `-` to negate it, and a record must satisfy
//! all terms (conjunction). A term without a `qualifier:` prefix searches
//! free text. Values with whitespace can be quoted: `label:"help wanted"`.
//!
//! ## Qualifiers
//!
//! - `text:word` (or a bare `word`) - number, title and body contain the value
//! - `ref:owner/repo#n` - the record with that key, or one linked with it
//! - `is:open` / `is:closed` - by state
//! - `is:issue` / `is:pull` - by record kind
//! - `is:assigned` / `is:unassigned` - assignee list non-empty / empty
//! - `is:milestoned` - a milestone is set
//! - `is:epic` - not a child of any other record
//! - `label:name` - a label name contains the value
//! - `repo:owner/name` - the repository form contains the value
//! - `milestone:title` - milestone title starts with the value
//! - `author:` / `assignee:` / `reviewer:` / `commented:login` - login
//!   starts with the value; `involves:login` matches any of the four
//! - `created:>2023-03-01` / `updated:<=2024-01-01` - temporal comparison
//!   with `>`, `>=`, `<`, `<=`
//!
//! The literal value `@me` stands for the acting user passed to
//! [`CompiledQuery::compile`].
//!
//! # Example
//!
//! ```
//! use tracker_search::{CompiledQuery, Evaluator, SearchContext};
//!
//! // Compile once; the query is a pure value and can be reused.
//! let query = CompiledQuery::compile("is:open label:bug -author:@me", Some("alice"));
//!
//! let records = vec![];
//! let context = SearchContext::new(&records);
//! let evaluator = Evaluator::new(&query, &context);
//!
//! let matches: Vec<_> = evaluator.filter_records(&records);
//! assert!(matches.is_empty());
//! ```

mod context;
mod error;
mod evaluator;
mod lexer;
mod matcher;
mod query;
mod temporal;
mod term;

pub use context::SearchContext;
pub use error::{MatchError, MatchResult};
pub use evaluator::Evaluator;
pub use lexer::Lexer;
pub use matcher::Matcher;
pub use query::{CompiledQuery, CURRENT_USER_SENTINEL};
pub use temporal::{TemporalFilter, TemporalOp};
pub use term::{Qualifier, Term};
