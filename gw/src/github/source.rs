//! CommitSource trait definition

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::{CommitDetail, CommitRef, Window};

/// Read-only view of the tracked repository's history
///
/// Implementations are stateless: every call is an independent remote request,
/// with no caching or deduplication between calls.
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// List the commits inside `window`, in the order the host returns them
    async fn list_commits(&self, window: &Window) -> Result<Vec<CommitRef>, UpstreamError>;

    /// Fetch the changed files of one commit
    async fn get_commit_detail(&self, commit: &CommitRef) -> Result<CommitDetail, UpstreamError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tracing::debug;

    /// In-memory commit source for unit tests
    #[derive(Default)]
    pub struct MockCommitSource {
        commits: Vec<CommitRef>,
        details: HashMap<String, CommitDetail>,
        failing: HashSet<String>,
        delays: HashMap<String, Duration>,
        fail_listing: bool,
        list_calls: AtomicUsize,
        detail_calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl MockCommitSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a listed commit whose detail fetch succeeds
        pub fn with_commit(mut self, detail: CommitDetail) -> Self {
            self.commits.push(CommitRef::new(detail.id.clone()));
            self.details.insert(detail.id.clone(), detail);
            self
        }

        /// Add a listed commit whose detail fetch fails
        pub fn with_failing_commit(mut self, id: &str) -> Self {
            self.commits.push(CommitRef::new(id));
            self.failing.insert(id.to_string());
            self
        }

        /// Delay the detail fetch of `id`
        pub fn with_delay(mut self, id: &str, delay: Duration) -> Self {
            self.delays.insert(id.to_string(), delay);
            self
        }

        pub fn with_failing_listing(mut self) -> Self {
            self.fail_listing = true;
            self
        }

        pub fn commits(&self) -> &[CommitRef] {
            &self.commits
        }

        pub fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        pub fn detail_calls(&self) -> usize {
            self.detail_calls.load(Ordering::SeqCst)
        }

        pub fn max_in_flight(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CommitSource for MockCommitSource {
        async fn list_commits(&self, _window: &Window) -> Result<Vec<CommitRef>, UpstreamError> {
            debug!("MockCommitSource::list_commits: called");
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_listing {
                return Err(UpstreamError::Status {
                    url: "mock://commits".to_string(),
                    status: 502,
                });
            }
            Ok(self.commits.clone())
        }

        async fn get_commit_detail(&self, commit: &CommitRef) -> Result<CommitDetail, UpstreamError> {
            debug!(id = %commit.id, "MockCommitSource::get_commit_detail: called");
            self.detail_calls.fetch_add(1, Ordering::SeqCst);

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            match self.delays.get(&commit.id) {
                Some(delay) => tokio::time::sleep(*delay).await,
                None => tokio::task::yield_now().await,
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing.contains(&commit.id) {
                return Err(UpstreamError::Status {
                    url: format!("mock://commits/{}", commit.id),
                    status: 500,
                });
            }

            self.details.get(&commit.id).cloned().ok_or_else(|| UpstreamError::Decode {
                url: format!("mock://commits/{}", commit.id),
                message: "unknown commit".to_string(),
            })
        }
    }
}
