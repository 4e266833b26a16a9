//! Change aggregator - concurrent fan-out over listed commits
//!
//! Every commit's detail fetch runs as a future on the current task; nothing is
//! spawned. The fan-out is all-or-nothing: the first failed fetch drops the
//! outstanding ones and no partial matches are returned.

use futures::future::try_join_all;
use futures::{StreamExt, TryStreamExt, stream};
use tracing::debug;

use crate::domain::{CommitDetail, CommitRef, Match};
use crate::github::{CommitSource, UpstreamError};
use crate::matcher::is_interesting_change;

/// Fetch every commit's detail concurrently and collect the interesting changes
///
/// With `max_in_flight` unset (or zero) every commit is fetched at once.
/// Matches are concatenated in fetch completion order.
pub async fn aggregate(
    source: &dyn CommitSource,
    commits: &[CommitRef],
    max_in_flight: Option<usize>,
) -> Result<Vec<Match>, UpstreamError> {
    debug!(commit_count = %commits.len(), ?max_in_flight, "aggregate: called");

    let fetches = commits.iter().map(|commit| fetch_and_match(source, commit));

    let per_commit: Vec<Vec<Match>> = match max_in_flight {
        Some(limit) if limit > 0 => {
            debug!(%limit, "aggregate: bounded fan-out");
            stream::iter(fetches).buffer_unordered(limit).try_collect().await?
        }
        _ => {
            debug!("aggregate: unbounded fan-out");
            try_join_all(fetches).await?
        }
    };

    let matches: Vec<Match> = per_commit.into_iter().flatten().collect();
    debug!(match_count = %matches.len(), "aggregate: done");
    Ok(matches)
}

async fn fetch_and_match(source: &dyn CommitSource, commit: &CommitRef) -> Result<Vec<Match>, UpstreamError> {
    let detail = source.get_commit_detail(commit).await?;
    Ok(matches_in(commit, &detail))
}

/// Interesting changes of one commit, attributed to the listed commit id
pub fn matches_in(commit: &CommitRef, detail: &CommitDetail) -> Vec<Match> {
    detail
        .files
        .iter()
        .filter_map(|file| is_interesting_change(&file.path, file.diff_text.as_deref()))
        .map(|entity| Match::new(entity, commit.id.clone()))
        .collect()
}
