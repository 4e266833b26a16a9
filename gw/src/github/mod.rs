//! Commit source module
//!
//! Lists commits in a time window and fetches per-commit file diffs.

mod client;
mod error;
pub mod source;

pub use client::{GithubClient, fetch_json};
pub use error::UpstreamError;
pub use source::CommitSource;
