//! Publish step
//!
//! Turns the pending working-tree changes into a pull request: new
//! branch, commit under the automation identity, push, open PR. Returns
//! the PR record together with the head SHA the CI wait will poll.

use crate::git;
use anyhow::{Context, Result};
use chrono::Utc;
use gh_merge_client::{PullRequest, PullRequestGateway};
use gh_merge_config::Config;

/// Outcome of the publish step
pub struct Published {
    pub pr: PullRequest,
    pub head_sha: String,
}

/// Commit the pending changes, push a fresh branch, and open a PR.
pub async fn commit_and_open_pr(
    cfg: &Config,
    gateway: &dyn PullRequestGateway,
) -> Result<Published> {
    let branch = format!("auto-merge-{}", Utc::now().timestamp());
    git::create_branch(&branch).await?;

    let email = format!("{}@users.noreply.github.com", cfg.actor);
    git::configure_identity(&cfg.actor, &email).await?;

    git::stage_all().await?;

    let commit_message = format!("{} Merge from {}", cfg.commit_prefix, cfg.base_branch);
    git::commit(&commit_message).await?;

    // The derived URL embeds the token; it is passed to git but never logged.
    let remote = cfg.push_remote.clone().unwrap_or_else(|| {
        format!(
            "https://x-access-token:{}@github.com/{}/{}.git",
            cfg.access_token, cfg.repo_owner, cfg.repo_name
        )
    });
    git::push(&remote, &branch).await?;

    let body = format!("Automated updates from {}.", cfg.base_branch);
    let pr = gateway
        .create_pull_request(&commit_message, &branch, &cfg.base_branch, &body)
        .await
        .context("failed to create pull request")?;

    let head_sha = git::head_sha().await?;

    Ok(Published { pr, head_sha })
}
