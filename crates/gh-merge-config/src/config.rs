//! Environment-sourced configuration
//!
//! The helper runs inside a CI job and is configured the way GitHub
//! Actions configures composite steps: `INPUT_*` variables for operator
//! options plus the ambient `GITHUB_*` variables of the job itself.
//! Everything is read once here; missing required values are fatal.

use crate::policy::RunPolicy;
use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_COMMIT_PREFIX: &str = "[Auto Merge]";
const DEFAULT_BASE_BRANCH: &str = "main";
const DEFAULT_ACTOR: &str = "github-actions";
const DEFAULT_WAIT_SECS: u64 = 30;
const DEFAULT_CI_TIMEOUT_SECS: u64 = 15 * 60;
const DEFAULT_CI_POLL_SECS: u64 = 10;

/// Immutable configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub access token used for the API and the push URL
    pub access_token: String,

    /// Prefix stamped on the commits this helper creates
    pub commit_prefix: String,

    /// Shell commands to run, in order
    pub commands: Vec<String>,

    /// Repository owner (user or organization)
    pub repo_owner: String,

    /// Repository name
    pub repo_name: String,

    /// Branch the pull request targets
    pub base_branch: String,

    /// Run-gate rules evaluated against the latest commit message
    pub policy: RunPolicy,

    /// Git author for the generated commit
    pub actor: String,

    /// Delay between pushing and the first CI status query
    pub initial_wait: Duration,

    /// Overall deadline for the CI wait
    pub ci_timeout: Duration,

    /// Delay between CI status queries
    pub ci_interval: Duration,

    /// Override push URL; when unset, a token-authenticated GitHub URL
    /// is derived from the repository coordinates
    pub push_remote: Option<String>,
}

impl Config {
    /// Read the full configuration from the environment.
    ///
    /// Required: an access token (`INPUT_GITHUB_ACCESS_TOKEN` or
    /// `GITHUB_ACCESS_TOKEN`), at least one command (`INPUT_COMMANDS`),
    /// and a well-formed `GITHUB_REPOSITORY` (`owner/name`).
    pub fn from_env() -> Result<Self> {
        let access_token = var("INPUT_GITHUB_ACCESS_TOKEN")
            .or_else(|| var("GITHUB_ACCESS_TOKEN"))
            .ok_or_else(|| {
                anyhow!("github access token is required (INPUT_GITHUB_ACCESS_TOKEN or GITHUB_ACCESS_TOKEN)")
            })?;

        let commit_prefix =
            var("INPUT_COMMIT_PREFIX").unwrap_or_else(|| DEFAULT_COMMIT_PREFIX.to_string());

        let commands = split_commands(&raw_var("INPUT_COMMANDS"));
        if commands.is_empty() {
            bail!("at least one command is required (INPUT_COMMANDS)");
        }

        let repository = raw_var("GITHUB_REPOSITORY");
        let (repo_owner, repo_name) = split_repository(&repository)
            .with_context(|| format!("invalid GITHUB_REPOSITORY: {}", repository))?;

        let base_branch = var("GITHUB_REF_NAME").unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string());

        // The helper must never react to its own commits, so the commit
        // prefix (and the historical spellings of it) are always ignored.
        let mut ignore_prefixes = vec![
            "Auto Merge".to_string(),
            "[Auto Merge]:".to_string(),
            commit_prefix.clone(),
        ];
        ignore_prefixes.extend(split_list(&raw_var("PREFIXES_TO_IGNORE")));

        let policy = RunPolicy::new(
            ignore_prefixes,
            split_list(&raw_var("PREFIXES_TO_RUN_ON")),
            split_list(&raw_var("CONTAINS_TO_RUN_ON")),
        );

        Ok(Self {
            access_token,
            commit_prefix,
            commands,
            repo_owner,
            repo_name,
            base_branch,
            policy,
            actor: var("GITHUB_ACTOR").unwrap_or_else(|| DEFAULT_ACTOR.to_string()),
            initial_wait: duration_secs(var("INPUT_WAIT_SECONDS"), DEFAULT_WAIT_SECS),
            ci_timeout: duration_secs(var("INPUT_CI_TIMEOUT_SECONDS"), DEFAULT_CI_TIMEOUT_SECS),
            ci_interval: duration_secs(var("INPUT_CI_POLL_SECONDS"), DEFAULT_CI_POLL_SECS),
            push_remote: var("INPUT_PUSH_REMOTE"),
        })
    }
}

/// Trimmed environment lookup; blank values count as unset
fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn raw_var(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

/// Split `INPUT_COMMANDS` on newlines and commas, dropping blanks
fn split_commands(raw: &str) -> Vec<String> {
    raw.lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-delimited rule list, dropping blanks
fn split_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_repository(raw: &str) -> Result<(String, String)> {
    match raw.split('/').collect::<Vec<_>>().as_slice() {
        [owner, name] if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => bail!("expected owner/name"),
    }
}

/// Parse a whole-seconds value; unparsable or non-positive falls back
fn duration_secs(value: Option<String>, default_secs: u64) -> Duration {
    let secs = value
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|s| *s > 0)
        .map(|s| s as u64)
        .unwrap_or(default_secs);
    Duration::from_secs(secs)
}
