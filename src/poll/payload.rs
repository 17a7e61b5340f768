//! Payload-shape selection for the polling loop.

use crate::notification::{Notification, NotificationBatch};
use crate::source::{BatchLimit, NotificationSource, SourceError};

/// A payload shape the engine can poll for.
///
/// The engine supports exactly two shapes, selected at construction by
/// which concrete service type is instantiated:
/// - [`Notification`]: one record per iteration
/// - [`NotificationBatch`]: one ordered batch per iteration
///
/// Both shapes share the same loop structure, cancellation semantics,
/// and error propagation; only the fetch call and the delivery
/// argument type differ.
pub trait PollPayload: Send + Sync + Sized + 'static {
    /// Shape name used in log events.
    const SHAPE: &'static str;

    /// Fetches one payload of this shape from the source.
    fn fetch<S: NotificationSource>(
        source: &S,
        limit: Option<BatchLimit>,
    ) -> impl std::future::Future<Output = Result<Self, SourceError>> + Send;

    /// Number of notification records carried by this payload.
    fn record_count(&self) -> usize;
}

impl PollPayload for Notification {
    const SHAPE: &'static str = "single";

    async fn fetch<S: NotificationSource>(
        source: &S,
        _limit: Option<BatchLimit>,
    ) -> Result<Self, SourceError> {
        source.fetch_one().await
    }

    fn record_count(&self) -> usize {
        1
    }
}

impl PollPayload for NotificationBatch {
    const SHAPE: &'static str = "batch";

    async fn fetch<S: NotificationSource>(
        source: &S,
        limit: Option<BatchLimit>,
    ) -> Result<Self, SourceError> {
        source.fetch_batch(limit).await
    }

    fn record_count(&self) -> usize {
        self.len()
    }
}
