//! Data models for the publication pipeline.
//!
//! [`paper`] mirrors the Semantic Scholar API schema (`#[serde(default)]` for
//! optional fields, camelCase renames); [`publication`] is the normalized
//! record the rest of the pipeline works on.

mod paper;
mod publication;

pub use paper::{AuthorPapersPage, AuthorRef, ExternalIds, Paper};
pub use publication::Publication;
