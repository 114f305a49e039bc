//! Data model for tracked issues and pull requests.
//!
//! This crate defines the record types that the search engine filters:
//! [`Record`] is a tagged union of [`Issue`] and [`PullRequest`], sharing
//! most fields and exposing the shared ones through accessor methods so
//! callers never need to match on the variant for common data.
//!
//! Records arrive from an external collaborator as already-parsed JSON, so
//! every type here derives `Serialize`/`Deserialize` and list fields use
//! `#[serde(default)]`, so a record lacking an optional field deserializes
//! with that field empty rather than failing.

pub mod models;

pub use models::*;
