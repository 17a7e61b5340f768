//! Subscriber capability and failure type.

use std::any::Any;

use thiserror::Error;

/// A listener that receives delivered payloads of shape `P`.
///
/// The engine instantiates `P` as either a single
/// [`Notification`](crate::notification::Notification) or a whole
/// [`NotificationBatch`](crate::notification::NotificationBatch),
/// selected by which service variant is constructed.
///
/// # Delivery contract
///
/// `receive` is called synchronously, in registration order, once per
/// polling iteration. Subscribers are expected to process quickly; a
/// slow subscriber delays delivery to subsequent subscribers and
/// delays the next fetch. A subscriber that needs asynchronous or
/// long-running handling should hand the payload off to its own task.
///
/// Returning an error aborts delivery to the remaining subscribers of
/// that iteration and terminates the subscription - the engine
/// deliberately does not isolate subscriber failures.
///
/// The `Any` supertrait allows callers to retrieve subscribers of one
/// concrete kind from a heterogeneous registry; see
/// [`PollService::subscribers_of`](crate::poll::PollService::subscribers_of).
pub trait Subscriber<P>: Any + Send + Sync {
    /// Handles one delivered payload.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriberError`] to reject the payload and terminate
    /// the subscription.
    fn receive(&self, payload: &P) -> Result<(), SubscriberError>;
}

/// Error raised by a subscriber while handling a delivered payload.
///
/// Wraps whatever failure the subscriber produced; the engine
/// propagates it to the launcher of the polling task unchanged.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct SubscriberError {
    #[from]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SubscriberError {
    /// Wraps an underlying error.
    #[must_use]
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Creates an error from a plain message.
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msg_displays_verbatim() {
        let error = SubscriberError::msg("queue full");
        assert_eq!(error.to_string(), "queue full");
    }

    #[test]
    fn new_wraps_underlying_error() {
        let inner = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error = SubscriberError::new(inner);
        assert!(error.to_string().contains("pipe closed"));
    }
}
