//! Shell command execution
//!
//! Runs the operator-configured commands sequentially through
//! `bash -lc`, with stdout/stderr inherited so their output lands in
//! the CI job log. The first non-zero exit aborts the run.

use anyhow::{bail, Context, Result};
use std::process::Stdio;
use tokio::process::Command;

/// Run the configured commands in order.
///
/// Entries are trimmed and blank ones skipped; the remaining entries
/// run one at a time, each to completion, before the next starts.
pub async fn run_all(commands: &[String]) -> Result<()> {
    for raw in commands {
        let command = raw.trim();
        if command.is_empty() {
            continue;
        }

        log::info!("Running command: {}", command);
        let status = Command::new("bash")
            .arg("-lc")
            .arg(command)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("failed to start command ({})", command))?;

        if !status.success() {
            bail!("command failed ({}): {}", command, status);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_commands_run_in_order() {
        let commands = vec!["true".to_string(), "  ".to_string(), "exit 0".to_string()];
        assert!(run_all(&commands).await.is_ok());
    }

    #[tokio::test]
    async fn test_nonzero_exit_aborts_with_command_name() {
        let commands = vec!["true".to_string(), "exit 3".to_string(), "true".to_string()];
        let err = run_all(&commands).await.unwrap_err();
        assert!(err.to_string().contains("exit 3"));
    }
}
