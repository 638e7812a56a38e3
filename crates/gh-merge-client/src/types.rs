//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API. They are
//! intentionally lean: only the fields the auto-merge flow inspects are
//! carried over from the API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// PR body/description
    pub body: Option<String>,

    /// Author's GitHub username
    pub author: String,

    /// HEAD commit SHA
    pub head_sha: String,

    /// HEAD branch name (e.g., "auto-merge-1700000000")
    pub head_branch: String,

    /// Base branch name (e.g., "main")
    pub base_branch: String,

    /// PR URL for linking in logs
    pub html_url: String,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// When the PR was last updated
    pub updated_at: DateTime<Utc>,
}

/// Combined commit status from the GitHub API
///
/// The overall `state` is kept as the raw string from the API. The wait
/// loop normalizes and compares it itself; labels it does not recognize
/// are treated as still-running rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedStatus {
    /// Overall state combining all statuses ("pending", "success",
    /// "failure", "error")
    pub state: String,

    /// Total number of status checks
    #[serde(default)]
    pub total_count: u64,

    /// Individual statuses
    #[serde(default)]
    pub statuses: Vec<CommitStatus>,
}

/// Individual commit status (from the Status API, not the Checks API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Status context (e.g., "ci/circleci")
    #[serde(default)]
    pub context: Option<String>,

    /// Current state
    pub state: String,

    /// Description of the status
    #[serde(default)]
    pub description: Option<String>,

    /// URL for more details
    #[serde(default)]
    pub target_url: Option<String>,
}

/// Result of a merge operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeResult {
    /// Whether the merge was performed
    pub merged: bool,
    /// Commit SHA of the merge commit (if performed)
    pub sha: Option<String>,
    /// Message from the merge operation
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_status_deserializes_raw_api_shape() {
        // Trimmed-down payload in the shape GitHub returns, including
        // fields we do not model.
        let json = r#"{
            "state": "pending",
            "total_count": 2,
            "sha": "abc123",
            "repository": {"id": 1, "name": "repo"},
            "statuses": [
                {
                    "context": "ci/build",
                    "state": "success",
                    "description": "Build passed",
                    "target_url": "https://example.com/build",
                    "id": 42
                },
                {
                    "context": "ci/test",
                    "state": "pending",
                    "description": null,
                    "target_url": null
                }
            ]
        }"#;

        let status: CombinedStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state, "pending");
        assert_eq!(status.total_count, 2);
        assert_eq!(status.statuses.len(), 2);
        assert_eq!(status.statuses[0].context.as_deref(), Some("ci/build"));
        assert_eq!(status.statuses[1].state, "pending");
    }

    #[test]
    fn test_combined_status_tolerates_missing_optionals() {
        let json = r#"{"state": "success"}"#;
        let status: CombinedStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state, "success");
        assert_eq!(status.total_count, 0);
        assert!(status.statuses.is_empty());
    }

    #[test]
    fn test_merge_result_roundtrip() {
        let result = MergeResult {
            merged: false,
            sha: None,
            message: "Pull Request is not mergeable".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: MergeResult = serde_json::from_str(&json).unwrap();

        assert!(!deserialized.merged);
        assert!(deserialized.sha.is_none());
        assert_eq!(deserialized.message, "Pull Request is not mergeable");
    }
}
