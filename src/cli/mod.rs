//! CLI module
//!
//! Command-line interface over [`VibifyClient`](crate::api::VibifyClient).
//! Every endpoint has a subcommand; `request` sends a raw call to any path.
//! Output is the normalized response as JSON: `{"status": .., "body": ..}`.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, RecommendArgs};
pub use runner::{render, Runner};
