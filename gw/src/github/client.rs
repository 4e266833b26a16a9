//! GitHub REST client implementation
//!
//! Implements CommitSource against the commits API of a single repository.
//! No client-side timeout is configured; requests rely on transport defaults.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{CommitSource, UpstreamError};
use crate::config::GithubConfig;
use crate::domain::{ChangedFile, CommitDetail, CommitRef, Window};

/// Media type recommended by the GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GET `url` and decode the JSON body, mapping every failure to UpstreamError
pub async fn fetch_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, UpstreamError> {
    debug!(%url, ?query, "fetch_json: called");
    let response = http.get(url).query(query).send().await?;

    let status = response.status();
    if !status.is_success() {
        debug!(%status, "fetch_json: non-success status");
        return Err(UpstreamError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    debug!(body_len = %body.len(), "fetch_json: response body read");
    serde_json::from_str(&body).map_err(|e| UpstreamError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// GitHub commits API client for one repository
pub struct GithubClient {
    api_base_url: String,
    owner: String,
    repo: String,
    http: Client,
}

impl GithubClient {
    /// Create a new client from configuration
    pub fn from_config(config: &GithubConfig) -> Result<Self, UpstreamError> {
        debug!(?config, "GithubClient::from_config: called");
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            http,
        })
    }

    fn commits_url(&self) -> String {
        format!("{}/repos/{}/{}/commits", self.api_base_url, self.owner, self.repo)
    }
}

#[async_trait]
impl CommitSource for GithubClient {
    async fn list_commits(&self, window: &Window) -> Result<Vec<CommitRef>, UpstreamError> {
        let url = self.commits_url();
        debug!(%url, since = %window.since_param(), until = %window.until_param(), "GithubClient::list_commits: called");

        let query = [("since", window.since_param()), ("until", window.until_param())];
        let summaries: Vec<CommitSummary> = fetch_json(&self.http, &url, &query).await?;

        debug!(count = %summaries.len(), "GithubClient::list_commits: listed");
        Ok(summaries.into_iter().map(|s| CommitRef::new(s.sha)).collect())
    }

    async fn get_commit_detail(&self, commit: &CommitRef) -> Result<CommitDetail, UpstreamError> {
        let url = format!("{}/{}", self.commits_url(), commit.id);
        debug!(%url, "GithubClient::get_commit_detail: called");

        let response: CommitResponse = fetch_json(&self.http, &url, &[]).await?;
        Ok(response.into())
    }
}

#[derive(Debug, Deserialize)]
struct CommitSummary {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct CommitResponse {
    sha: String,
    #[serde(default)]
    files: Option<Vec<FileResponse>>,
}

#[derive(Debug, Deserialize)]
struct FileResponse {
    filename: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    patch: Option<String>,
}

impl From<CommitResponse> for CommitDetail {
    fn from(response: CommitResponse) -> Self {
        let files = response
            .files
            .unwrap_or_default()
            .into_iter()
            .map(|f| ChangedFile {
                path: f.filename,
                status: f.status,
                diff_text: f.patch,
            })
            .collect();

        CommitDetail { id: response.sha, files }
    }
}
