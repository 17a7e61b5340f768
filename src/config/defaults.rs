//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default polling interval in seconds.
pub const INTERVAL_SECS: u64 = 30;

/// Default HTTP request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Default payload shape for the binary.
pub const MODE: &str = "batch";

/// Default polling interval as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_secs(INTERVAL_SECS)
}

/// Default HTTP request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
