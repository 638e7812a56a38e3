//! Octocrab-based pull-request gateway
//!
//! Direct implementation of the `PullRequestGateway` trait using the
//! octocrab library. The gateway is bound to one repository and makes
//! real API calls.

use crate::client::PullRequestGateway;
use crate::types::{CombinedStatus, MergeResult, PullRequest};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API gateway using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabGateway {
    octocrab: Arc<Octocrab>,
    owner: String,
    repo: String,
}

impl OctocrabGateway {
    /// Create a gateway over an existing octocrab instance
    pub fn new(octocrab: Arc<Octocrab>, owner: &str, repo: &str) -> Self {
        Self {
            octocrab,
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    /// Build an authenticated gateway from a personal access token
    pub fn from_token(token: String, owner: &str, repo: &str) -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token)
            .build()
            .context("Failed to build Octocrab client")?;
        Ok(Self::new(Arc::new(octocrab), owner, repo))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn create_pull_request(
        &self,
        title: &str,
        head: &str,
        base: &str,
        body: &str,
    ) -> anyhow::Result<PullRequest> {
        debug!(
            "Creating PR for {}/{}: {} -> {}",
            self.owner, self.repo, head, base
        );

        let pr = self
            .octocrab
            .pulls(&self.owner, &self.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        Ok(convert_pull_request(&pr))
    }

    async fn combined_status(&self, sha: &str) -> anyhow::Result<CombinedStatus> {
        debug!(
            "Fetching combined status for {}/{} @ {}",
            self.owner, self.repo, sha
        );

        // Raw GET so the state label stays a plain string; octocrab's
        // typed CombinedStatus rejects vocabulary it does not know.
        let route = format!(
            "/repos/{}/{}/commits/{}/status",
            self.owner, self.repo, sha
        );
        let status: CombinedStatus = self.octocrab.get(route, None::<&()>).await?;

        Ok(status)
    }

    async fn merge_pull_request(
        &self,
        pr_number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> anyhow::Result<MergeResult> {
        debug!(
            "Squash-merging PR #{} in {}/{}",
            pr_number, self.owner, self.repo
        );

        let merge = self
            .octocrab
            .pulls(&self.owner, &self.repo)
            .merge(pr_number)
            .title(commit_title)
            .message(commit_message)
            .method(octocrab::params::pulls::MergeMethod::Squash)
            .send()
            .await?;

        Ok(MergeResult {
            merged: merge.merged,
            sha: merge.sha,
            message: merge.message.unwrap_or_default(),
        })
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        body: pr.body.clone(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        head_sha: pr.head.sha.clone(),
        head_branch: pr.head.ref_field.clone(),
        base_branch: pr.base.ref_field.clone(),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
        created_at: pr.created_at.unwrap_or_else(chrono::Utc::now),
        updated_at: pr.updated_at.unwrap_or_else(chrono::Utc::now),
    }
}
