//! Human-readable report messages

use crate::domain::{Match, RunResult};

/// First line of a report listing changed chains
pub const SUCCESS_HEADER: &str = ":information_source: Changes have been made for the following chains:";

/// Prefix of a report for a failed run
pub const FAILURE_PREFIX: &str = ":warning: Error occurred while processing commits:";

/// Link to a commit on the hosting site's web UI
pub fn commit_link(commit_base_url: &str, commit_id: &str) -> String {
    format!("{}/{}", commit_base_url.trim_end_matches('/'), commit_id)
}

/// Summary of changed chains, one Slack-style `<link|label>` bullet per match
pub fn format_matches(matches: &[Match], commit_base_url: &str) -> String {
    let lines: Vec<String> = matches
        .iter()
        .map(|m| format!("• <{}|{}>", commit_link(commit_base_url, &m.commit_id), m.entity_name))
        .collect();
    format!("{}\n{}", SUCCESS_HEADER, lines.join("\n"))
}

pub fn format_failure(description: &str) -> String {
    format!("{} {}", FAILURE_PREFIX, description)
}

/// Message to send for a run, or None when there is nothing to report
pub fn render(result: &RunResult, commit_base_url: &str) -> Option<String> {
    match result {
        RunResult::Success(matches) if matches.is_empty() => None,
        RunResult::Success(matches) => Some(format_matches(matches, commit_base_url)),
        RunResult::Failure(description) => Some(format_failure(description)),
    }
}
