//! gh-auto-merge
//!
//! Unattended CI helper: runs configured commands, and when they change
//! the working tree, commits the result to a fresh branch, opens a pull
//! request, waits for the combined CI status, and squash-merges once
//! checks pass. Any step failing aborts the run with a non-zero exit;
//! "nothing to do" outcomes (run gate suppressed, no changes) exit zero.

use anyhow::Result;
use gh_merge_client::OctocrabGateway;
use gh_merge_config::Config;

mod ci_wait;
mod commands;
mod git;
mod merge;
mod publish;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    if let Err(err) = run().await {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = Config::from_env()?;

    let message = git::latest_commit_message().await?;
    if !cfg.policy.should_run(&message) {
        log::info!("Last commit does not pass the run gate. Exiting without action.");
        return Ok(());
    }

    commands::run_all(&cfg.commands).await?;

    if !git::has_pending_changes().await? {
        log::info!("No changes detected after running commands. Nothing to commit.");
        return Ok(());
    }

    let gateway =
        OctocrabGateway::from_token(cfg.access_token.clone(), &cfg.repo_owner, &cfg.repo_name)?;

    let published = publish::commit_and_open_pr(&cfg, &gateway).await?;
    log::info!(
        "Opened pull request #{}: {}",
        published.pr.number,
        published.pr.title
    );

    // Give the CI provider time to register the new commit before the
    // first status query.
    log::info!(
        "Waiting {}s before checking CI status...",
        cfg.initial_wait.as_secs()
    );
    tokio::time::sleep(cfg.initial_wait).await;

    let clock = ci_wait::TokioClock::new();
    ci_wait::wait_for_ci(
        &gateway,
        &published.head_sha,
        cfg.ci_timeout,
        cfg.ci_interval,
        &clock,
    )
    .await?;

    merge::squash_merge(&cfg.commit_prefix, &gateway, &published.pr).await?;

    log::info!("Completed merge into {}.", cfg.base_branch);
    Ok(())
}
