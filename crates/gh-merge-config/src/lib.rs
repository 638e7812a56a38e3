//! Configuration for gh-auto-merge
//!
//! This crate provides:
//! - The environment-sourced `Config` the helper runs with
//! - The `RunPolicy` that decides whether an invocation should act at all
//!
//! All environment lookups happen once, in `Config::from_env`; the rest
//! of the helper receives one immutable value by parameter.

pub mod config;
pub mod policy;

pub use config::Config;
pub use policy::RunPolicy;
