//! GasWatch - chain-registry gas price change watcher
//!
//! A periodic batch job: list the commits pushed to the chain registry in the
//! last few hours, inspect each commit's diffs for edits to gas price fields in
//! `<chain>/chain.json`, and post a summary to a webhook when anything changed.
//!
//! # Pipeline
//!
//! ```text
//! list_commits(window) ──► aggregate (fan-out get_commit_detail + match) ──► report
//!        │                          │                                        ▲
//!        └──────── UpstreamError ───┴────────────── Failure ─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Commits, changed files, matches, run results
//! - [`github`] - `CommitSource` trait and the GitHub REST implementation
//! - [`matcher`] - Interest predicate over file path + diff text
//! - [`aggregator`] - Concurrent all-or-nothing fan-out over commits
//! - [`notify`] - Message formatting and webhook delivery
//! - [`gas`] - Published gas price tiers (reference data)
//! - [`runner`] - Run controller state machine
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod domain;
pub mod gas;
pub mod github;
pub mod matcher;
pub mod notify;
pub mod runner;

pub use aggregator::aggregate;
pub use config::{Config, GasConfig, GithubConfig, NotifyConfig};
pub use domain::{ChangedFile, CommitDetail, CommitRef, Match, RunResult, Window};
pub use gas::{GasPriceClient, GasPriceTiers, GasPrices};
pub use github::{CommitSource, GithubClient, UpstreamError};
pub use matcher::is_interesting_change;
pub use notify::{NotificationDeliveryError, Notifier, WebhookNotifier};
pub use runner::{RunSettings, RunState, execute, report, run};
