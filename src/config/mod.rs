//! Configuration layer for notipoll.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The only required field is the endpoint `url`; CLI takes precedence
//! over TOML for it. Everything else has a built-in default.
//!
//! For headers, TOML headers are applied first and CLI `--header`
//! values override entries with the same name. A bearer token (CLI
//! wins, then TOML) is rendered as an `Authorization: Bearer ...`
//! header last, overriding any explicit `Authorization` entry.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, PollModeArg};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{PollMode, ValidatedConfig, write_default_config};
