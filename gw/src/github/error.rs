//! Upstream error types

use std::error::Error as _;

use thiserror::Error;

/// Failure to list commits, fetch commit detail, or fetch reference data
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl UpstreamError {
    /// HTTP status if the upstream answered with a non-success code
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            UpstreamError::Network(e) => e.status().map(|s| s.as_u16()),
            UpstreamError::Decode { .. } => None,
        }
    }

    /// Display text followed by each underlying cause not already shown
    ///
    /// reqwest's own Display stops at "error sending request"; the connect or
    /// DNS failure behind it is only reachable through `source()`.
    pub fn describe(&self) -> String {
        let mut description = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            let text = err.to_string();
            if !description.contains(&text) {
                description.push_str(": ");
                description.push_str(&text);
            }
            cause = err.source();
        }
        description
    }
}
