//! Error types for the polling engine.

use thiserror::Error;

use crate::source::SourceError;

use super::subscriber::SubscriberError;

/// Error type for subscription construction and polling.
///
/// Every variant is fatal to the running loop; the engine performs no
/// retries and no partial recovery. Restarting after a fault means
/// constructing and launching a new service.
#[derive(Debug, Error)]
pub enum PollError {
    /// The polling interval was zero.
    ///
    /// Raised synchronously at construction; no subscription is
    /// produced.
    #[error("Polling interval must be greater than zero")]
    ZeroInterval,

    /// The configured batch limit falls outside the accepted range.
    ///
    /// Raised synchronously at construction, before any I/O.
    #[error("Invalid batch limit: {0}")]
    InvalidLimit(#[source] SourceError),

    /// Fetching from the notification source failed.
    ///
    /// The source error is propagated verbatim; retry policy, if any,
    /// belongs to the source itself.
    #[error("Failed to fetch notifications: {0}")]
    Fetch(#[source] SourceError),

    /// A subscriber rejected a delivered payload.
    ///
    /// Remaining subscribers for that iteration are skipped and the
    /// loop terminates; the engine does not isolate subscriber
    /// failures.
    #[error("Subscriber failed: {0}")]
    Subscriber(#[source] SubscriberError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn zero_interval_displays_message() {
        assert_eq!(
            PollError::ZeroInterval.to_string(),
            "Polling interval must be greater than zero"
        );
    }

    #[test]
    fn invalid_limit_preserves_source_chain() {
        let error = PollError::InvalidLimit(SourceError::InvalidLimit { value: 0 });

        assert!(error.to_string().contains("Invalid batch limit"));
        let source = error.source().expect("has source");
        assert!(source.to_string().contains('0'));
    }

    #[test]
    fn fetch_error_preserves_source_chain() {
        let error = PollError::Fetch(SourceError::Empty);

        let source = error.source().expect("has source");
        assert!(source.to_string().contains("no records"));
    }

    #[test]
    fn subscriber_error_displays_with_context() {
        let error = PollError::Subscriber(SubscriberError::msg("sink full"));

        assert!(error.to_string().contains("Subscriber failed"));
        assert!(error.to_string().contains("sink full"));
    }
}
