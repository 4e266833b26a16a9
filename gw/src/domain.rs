//! Domain types for a single watch run
//!
//! Everything here is built fresh per run and dropped when the run finishes.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a commit returned by the listing call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitRef {
    pub id: String,
}

impl CommitRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One file touched by a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub path: String,

    /// Change status reported by the host (added, modified, removed, ...)
    pub status: String,

    /// Unified diff fragment; absent for binary or oversized files
    pub diff_text: Option<String>,
}

impl ChangedFile {
    pub fn new(path: impl Into<String>, diff_text: Option<&str>) -> Self {
        Self {
            path: path.into(),
            status: "modified".to_string(),
            diff_text: diff_text.map(str::to_string),
        }
    }
}

/// Full detail of one commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub id: String,
    pub files: Vec<ChangedFile>,
}

/// A changed gas price in one chain's config, attributed to a commit
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    pub entity_name: String,
    pub commit_id: String,
}

impl Match {
    pub fn new(entity_name: impl Into<String>, commit_id: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            commit_id: commit_id.into(),
        }
    }
}

/// Outcome of one run; exactly one is produced per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Success(Vec<Match>),
    Failure(String),
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RunResult::Success(_))
    }

    /// Matches of a successful run, empty for a failure
    pub fn matches(&self) -> &[Match] {
        match self {
            RunResult::Success(matches) => matches,
            RunResult::Failure(_) => &[],
        }
    }
}

/// Look-back window of commits considered by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    /// Window of `lookback` ending at `end`
    pub fn ending_at(end: DateTime<Utc>, lookback: Duration) -> Self {
        Self {
            start: end - lookback,
            end,
        }
    }

    /// `since` query value, ISO-8601 UTC with millisecond precision
    pub fn since_param(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `until` query value, ISO-8601 UTC with millisecond precision
    pub fn until_param(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
