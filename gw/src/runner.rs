//! Run controller
//!
//! Drives one watch run through `Idle → Listing → Aggregating → Reporting → Done`.
//! Any listing or aggregation failure jumps straight to Reporting with a
//! failure description. At most one notification is sent per run.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info};

use crate::aggregator::aggregate;
use crate::config::Config;
use crate::domain::{RunResult, Window};
use crate::github::CommitSource;
use crate::notify::{Notifier, render};

/// Stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Listing,
    Aggregating,
    Reporting,
    Done,
}

impl RunState {
    /// Whether `next` is a legal successor of this state
    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (Idle, Listing) | (Listing, Aggregating) | (Listing, Reporting) | (Aggregating, Reporting) | (Reporting, Done)
        )
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Listing => "listing",
            RunState::Aggregating => "aggregating",
            RunState::Reporting => "reporting",
            RunState::Done => "done",
        };
        write!(f, "{}", name)
    }
}

fn advance(state: &mut RunState, next: RunState) {
    debug_assert!(state.can_transition_to(next), "illegal transition {} -> {}", state, next);
    debug!(from = %state, to = %next, "advance: state transition");
    *state = next;
}

/// Parameters of a run derived from configuration
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub lookback: Duration,
    pub max_concurrent_fetches: Option<usize>,
    pub commit_base_url: String,
}

impl RunSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            lookback: Duration::hours(i64::from(config.github.lookback_hours)),
            max_concurrent_fetches: config.github.max_concurrent_fetches,
            commit_base_url: config.github.commit_base_url.clone(),
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// List and aggregate the window ending at `now`
///
/// Never fails: upstream errors become `RunResult::Failure`.
pub async fn run(now: DateTime<Utc>, source: &dyn CommitSource, settings: &RunSettings) -> RunResult {
    let mut state = RunState::Idle;
    run_to_reporting(now, source, settings, &mut state).await
}

/// Drive `state` from Idle to Reporting, returning the run's result
async fn run_to_reporting(
    now: DateTime<Utc>,
    source: &dyn CommitSource,
    settings: &RunSettings,
    state: &mut RunState,
) -> RunResult {
    let window = Window::ending_at(now, settings.lookback);
    debug!(since = %window.since_param(), until = %window.until_param(), "run: called");

    advance(state, RunState::Listing);
    let commits = match source.list_commits(&window).await {
        Ok(commits) => commits,
        Err(e) => {
            error!(error = %e, "Listing commits failed");
            advance(state, RunState::Reporting);
            return RunResult::Failure(e.describe());
        }
    };
    info!("Number of commits: {}", commits.len());

    advance(state, RunState::Aggregating);
    let result = match aggregate(source, &commits, settings.max_concurrent_fetches).await {
        Ok(matches) => {
            info!(?matches, "Updated chains: {}", matches.len());
            RunResult::Success(matches)
        }
        Err(e) => {
            error!(error = %e, "Fetching commit details failed");
            RunResult::Failure(e.describe())
        }
    };

    advance(state, RunState::Reporting);
    result
}

/// Send the notification for `result`, if there is anything to report
///
/// Returns whether a notification was attempted.
pub async fn report(result: &RunResult, notifier: &dyn Notifier, commit_base_url: &str) -> bool {
    match render(result, commit_base_url) {
        Some(message) => {
            debug!("report: sending notification");
            notifier.notify(&message).await;
            true
        }
        None => {
            debug!("report: nothing to report");
            false
        }
    }
}

/// Full run: list, aggregate, report
pub async fn execute(
    now: DateTime<Utc>,
    source: &dyn CommitSource,
    notifier: &dyn Notifier,
    settings: &RunSettings,
) -> RunResult {
    let mut state = RunState::Idle;
    let result = run_to_reporting(now, source, settings, &mut state).await;
    report(&result, notifier, &settings.commit_base_url).await;
    advance(&mut state, RunState::Done);
    info!(success = %result.is_success(), "Run finished");
    result
}
