//! Git plumbing wrappers
//!
//! Thin async wrappers over the `git` binary. Mutating operations
//! inherit stdio so git's own output lands in the job log; query
//! operations capture stdout. Every failure is fatal to the run.
//!
//! Error messages carry a short description instead of the raw
//! arguments: the push URL embeds the access token and must never be
//! echoed.

use anyhow::{bail, Context, Result};
use std::process::Stdio;
use tokio::process::Command;

/// Subject line of the most recent commit
pub async fn latest_commit_message() -> Result<String> {
    capture("get latest commit message", &["log", "-1", "--pretty=%s"]).await
}

/// Whether the working tree has anything to commit
pub async fn has_pending_changes() -> Result<bool> {
    let out = capture("check git status", &["status", "--porcelain"]).await?;
    Ok(!out.is_empty())
}

pub async fn create_branch(name: &str) -> Result<()> {
    run("create branch", &["checkout", "-b", name]).await
}

pub async fn configure_identity(name: &str, email: &str) -> Result<()> {
    run("configure git user", &["config", "user.name", name]).await?;
    run("configure git user", &["config", "user.email", email]).await
}

pub async fn stage_all() -> Result<()> {
    run("stage changes", &["add", "--all"]).await
}

pub async fn commit(message: &str) -> Result<()> {
    run("commit changes", &["commit", "-m", message]).await
}

pub async fn push(remote: &str, branch: &str) -> Result<()> {
    run("push branch", &["push", remote, branch]).await
}

/// SHA of the current HEAD commit
pub async fn head_sha() -> Result<String> {
    capture("get head sha", &["rev-parse", "HEAD"]).await
}

async fn run(desc: &str, args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("failed to {}", desc))?;

    if !status.success() {
        bail!("failed to {}: git exited with {}", desc, status);
    }
    Ok(())
}

async fn capture(desc: &str, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .await
        .with_context(|| format!("failed to {}", desc))?;

    if !output.status.success() {
        bail!(
            "failed to {}: {}",
            desc,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
