//! Pull-request gateway trait
//!
//! This module defines the `PullRequestGateway` trait that all gateway
//! implementations must satisfy. The auto-merge flow only ever talks to
//! this trait, which keeps the CI-wait and merge logic testable against
//! scripted implementations.

use crate::types::{CombinedStatus, MergeResult, PullRequest};
use async_trait::async_trait;

/// GitHub pull-request gateway
///
/// A gateway is bound to a single `{owner}/{repo}` pair at construction
/// time; the helper only ever operates on one repository per invocation.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks.
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Open a pull request from `head` into `base`
    ///
    /// # Arguments
    ///
    /// * `title` - PR title
    /// * `head` - Head branch name
    /// * `base` - Base branch name (e.g., "main")
    /// * `body` - PR description
    ///
    /// # Returns
    ///
    /// The created pull request, or an error if the API call fails
    /// (any non-2xx response is an error).
    async fn create_pull_request(
        &self,
        title: &str,
        head: &str,
        base: &str,
        body: &str,
    ) -> anyhow::Result<PullRequest>;

    /// Fetch the combined commit status for a commit
    ///
    /// This uses the legacy Status API, which aggregates all status
    /// checks for the commit into one overall state label.
    ///
    /// # Arguments
    ///
    /// * `sha` - The commit SHA to get status for
    async fn combined_status(&self, sha: &str) -> anyhow::Result<CombinedStatus>;

    /// Squash-merge a pull request
    ///
    /// The merge strategy is always squash; the helper supports no other
    /// strategy.
    ///
    /// # Arguments
    ///
    /// * `pr_number` - Pull request number
    /// * `commit_title` - Title for the squash commit
    /// * `commit_message` - Body for the squash commit
    ///
    /// # Returns
    ///
    /// The merge outcome. Note that a 2xx response with `merged == false`
    /// is not an error at this layer; the caller decides what a declined
    /// merge means.
    async fn merge_pull_request(
        &self,
        pr_number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> anyhow::Result<MergeResult>;
}
