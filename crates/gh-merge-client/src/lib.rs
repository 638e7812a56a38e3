//! GitHub pull-request gateway
//!
//! This crate provides the GitHub API surface needed by the auto-merge
//! helper: opening a pull request, fetching the combined commit status,
//! and squash-merging. The surface is a trait so the polling and merge
//! logic can be tested against scripted gateways without network access.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            PullRequestGateway trait              │
//! │  - create_pull_request()                         │
//! │  - combined_status()                             │
//! │  - merge_pull_request()                          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────────┐
//!              │  OctocrabGateway    │
//!              │  (direct API)       │
//!              └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_merge_client::{OctocrabGateway, PullRequestGateway};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = octocrab::Octocrab::builder()
//!     .personal_token("token".to_string())
//!     .build()?;
//!
//! let gateway = OctocrabGateway::new(Arc::new(octocrab), "owner", "repo");
//! let status = gateway.combined_status("abc123").await?;
//! println!("CI state: {}", status.state);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_gateway;
pub mod types;

pub use client::PullRequestGateway;
pub use octocrab_gateway::OctocrabGateway;
pub use types::{CombinedStatus, CommitStatus, MergeResult, PullRequest};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
