//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// notipoll: Notification queue poller
///
/// Polls a notification endpoint on a fixed interval and fans each
/// payload out to registered subscribers.
#[derive(Debug, Parser)]
#[command(name = "notipoll")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the notification endpoint (required for run mode)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Bearer token for Authorization header
    #[arg(long)]
    pub bearer: Option<String>,

    /// HTTP headers in 'Key=Value' or 'Key: Value' format (can be specified multiple times)
    #[arg(long = "header", value_name = "K=V")]
    pub headers: Vec<String>,

    /// Polling interval in seconds
    #[arg(long)]
    pub interval: Option<u64>,

    /// Maximum records per batch fetch (1-1000)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Payload shape delivered per iteration
    #[arg(long, value_enum)]
    pub mode: Option<PollModeArg>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for notipoll
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "notipoll.toml")]
        output: PathBuf,
    },
}

/// Payload shape argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PollModeArg {
    /// Deliver one notification per iteration
    #[value(name = "single")]
    Single,
    /// Deliver one batch of notifications per iteration
    #[value(name = "batch")]
    Batch,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
