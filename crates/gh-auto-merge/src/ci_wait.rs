//! CI wait protocol
//!
//! Polls the combined commit status for one commit until it resolves or
//! the deadline passes. Polling is deliberately sequential: the helper
//! is a short-lived CI process with no listener infrastructure, so a
//! bounded poll loop with a hard timeout is what keeps the job duration
//! bounded even if the status provider never resolves.

use async_trait::async_trait;
use gh_merge_client::PullRequestGateway;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Terminal outcomes of the CI wait other than success
#[derive(Debug, Error)]
pub enum CiWaitError {
    /// CI resolved to a failing state (`failure` or `error`)
    #[error("ci reported {0}")]
    Failed(String),

    /// CI did not resolve within the configured deadline
    #[error("ci did not finish within {0:?}")]
    TimedOut(Duration),

    /// A status query failed; the wait aborts rather than retrying
    #[error("failed to fetch combined status: {0}")]
    Gateway(#[source] anyhow::Error),
}

/// Time source for the wait loop
///
/// Injected so timeout behavior can be driven without real delays in
/// tests. `now` is a monotonic reading; only differences between
/// readings are meaningful.
#[async_trait]
pub trait WaitClock: Send + Sync {
    fn now(&self) -> Duration;
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation backed by the tokio timer
pub struct TokioClock {
    started: Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WaitClock for TokioClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Poll the combined status for `sha` until it resolves.
///
/// Terminal states: `success` returns `Ok`, `failure`/`error` return
/// [`CiWaitError::Failed`], and a deadline strictly exceeding `timeout`
/// returns [`CiWaitError::TimedOut`]. Any other state label (including
/// ones we do not recognize) keeps the loop polling; a query error
/// aborts immediately with no retry.
pub async fn wait_for_ci(
    gateway: &dyn PullRequestGateway,
    sha: &str,
    timeout: Duration,
    interval: Duration,
    clock: &dyn WaitClock,
) -> Result<(), CiWaitError> {
    let start = clock.now();

    loop {
        let status = gateway
            .combined_status(sha)
            .await
            .map_err(CiWaitError::Gateway)?;

        let state = status.state.to_lowercase();
        match state.as_str() {
            "success" => return Ok(()),
            "failure" | "error" => return Err(CiWaitError::Failed(state)),
            _ => {}
        }

        if clock.now().saturating_sub(start) > timeout {
            return Err(CiWaitError::TimedOut(timeout));
        }

        log::info!(
            "CI status is {}; checking again in {:?}...",
            status.state,
            interval
        );
        clock.sleep(interval).await;
    }
}
