//! Merge decision
//!
//! Finalizes the run by squash-merging the pull request. The gateway can
//! accept the merge call and still decline the merge (branch protection,
//! new commits on base); that outcome is distinct from a transport error
//! and gets its own variant.

use gh_merge_client::{PullRequest, PullRequestGateway};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// The API answered 2xx but reported `merged: false`
    #[error("merge was declined by the API: {0}")]
    Declined(String),

    /// Transport or non-2xx failure from the gateway
    #[error("failed to merge pull request: {0}")]
    Gateway(#[source] anyhow::Error),
}

/// Squash-merge the pull request.
///
/// The squash commit keeps the PR title and is stamped with the
/// configured commit prefix so the resulting commit lands on the
/// run-gate's ignore list.
pub async fn squash_merge(
    commit_prefix: &str,
    gateway: &dyn PullRequestGateway,
    pr: &PullRequest,
) -> Result<(), MergeError> {
    let commit_message = format!("{} Squash merge by automation", commit_prefix);

    let result = gateway
        .merge_pull_request(pr.number, &pr.title, &commit_message)
        .await
        .map_err(MergeError::Gateway)?;

    if !result.merged {
        return Err(MergeError::Declined(result.message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use gh_merge_client::{CombinedStatus, MergeResult};
    use std::sync::Mutex;

    fn pr() -> PullRequest {
        PullRequest {
            number: 7,
            title: "[Auto Merge] Merge from main".to_string(),
            body: Some("Automated updates from main.".to_string()),
            author: "github-actions".to_string(),
            head_sha: "abc123".to_string(),
            head_branch: "auto-merge-1700000000".to_string(),
            base_branch: "main".to_string(),
            html_url: "https://github.com/owner/repo/pull/7".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct MergeGateway {
        outcome: anyhow::Result<MergeResult>,
        seen: Mutex<Option<(u64, String, String)>>,
    }

    impl MergeGateway {
        fn new(outcome: anyhow::Result<MergeResult>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl PullRequestGateway for MergeGateway {
        async fn create_pull_request(
            &self,
            _title: &str,
            _head: &str,
            _base: &str,
            _body: &str,
        ) -> anyhow::Result<PullRequest> {
            unreachable!("not exercised by the merge step")
        }

        async fn combined_status(&self, _sha: &str) -> anyhow::Result<CombinedStatus> {
            unreachable!("not exercised by the merge step")
        }

        async fn merge_pull_request(
            &self,
            pr_number: u64,
            commit_title: &str,
            commit_message: &str,
        ) -> anyhow::Result<MergeResult> {
            *self.seen.lock().unwrap() = Some((
                pr_number,
                commit_title.to_string(),
                commit_message.to_string(),
            ));
            match &self.outcome {
                Ok(result) => Ok(result.clone()),
                Err(err) => Err(anyhow::anyhow!("{}", err)),
            }
        }
    }

    #[tokio::test]
    async fn test_merged_true_is_success() {
        let gateway = MergeGateway::new(Ok(MergeResult {
            merged: true,
            sha: Some("def456".to_string()),
            message: "Pull Request successfully merged".to_string(),
        }));

        let result = squash_merge("[Auto Merge]", &gateway, &pr()).await;
        assert!(result.is_ok());

        let (number, title, message) = gateway.seen.lock().unwrap().clone().unwrap();
        assert_eq!(number, 7);
        assert_eq!(title, "[Auto Merge] Merge from main");
        assert_eq!(message, "[Auto Merge] Squash merge by automation");
    }

    #[tokio::test]
    async fn test_merged_false_is_declined() {
        let gateway = MergeGateway::new(Ok(MergeResult {
            merged: false,
            sha: None,
            message: "Base branch was modified".to_string(),
        }));

        let result = squash_merge("[Auto Merge]", &gateway, &pr()).await;
        match result {
            Err(MergeError::Declined(message)) => {
                assert_eq!(message, "Base branch was modified");
            }
            other => panic!("expected Declined, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_gateway_error_passes_through() {
        let gateway = MergeGateway::new(Err(anyhow::anyhow!("405 Method Not Allowed")));

        let result = squash_merge("[Auto Merge]", &gateway, &pr()).await;
        match result {
            Err(MergeError::Gateway(err)) => {
                assert!(err.to_string().contains("405"));
            }
            other => panic!("expected Gateway, got {:?}", other),
        }
    }
}
