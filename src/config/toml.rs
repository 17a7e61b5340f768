//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Notification endpoint configuration section
    #[serde(default)]
    pub endpoint: EndpointSection,

    /// Polling configuration section
    #[serde(default)]
    pub poll: PollSection,
}

/// Notification endpoint configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointSection {
    /// Base URL of the notification endpoint
    pub url: Option<String>,

    /// Bearer token for Authorization header
    pub bearer: Option<String>,

    /// HTTP headers as key-value pairs
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// HTTP request timeout in seconds
    pub timeout: Option<u64>,
}

/// Polling configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PollSection {
    /// Polling interval in seconds
    pub interval: Option<u64>,

    /// Maximum records per batch fetch (1-1000)
    pub limit: Option<u32>,

    /// Payload shape: "single" or "batch"
    pub mode: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# notipoll Configuration File

[endpoint]
# Base URL of the notification endpoint (required)
# Notifications are fetched from "<url>/notifications"
# url = "https://queue.example.com/api/v1"

# Bearer token for Authorization header
# bearer = "your-token-here"

# HTTP request timeout in seconds (default: 10)
# timeout = 10

# HTTP headers
# [endpoint.headers]
# X-Custom-Header = "value"

[poll]
# Polling interval in seconds (default: 30)
interval = 30

# Maximum records per batch fetch, 1-1000 (unset = server default)
# limit = 100

# Payload shape delivered per iteration (default: batch)
# Accepted values: "single" or "batch"
# mode = "batch"
"#
    .to_string()
}
