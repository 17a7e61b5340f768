//! Application-facing polling service façade.

use std::sync::Arc;
use std::time::Duration;

use crate::notification::{Notification, NotificationBatch};
use crate::source::{BatchLimit, NotificationSource};
use crate::time::{Sleeper, TokioSleeper};

use super::error::PollError;
use super::payload::PollPayload;
use super::subscriber::Subscriber;
use super::subscription::Subscription;

/// Façade bundling one [`Subscription`] with its subscriber registry.
///
/// This is the unit applications construct and hold: subscriber
/// management on the front, the polling loop behind
/// [`PollService::start_polling`], and the embedded subscription
/// exposed for out-of-band cancellation.
///
/// Use the [`SinglePollService`] and [`BatchPollService`] aliases to
/// pick the payload shape.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use notipoll::poll::BatchPollService;
/// use notipoll::source::{RemoteSource, ReqwestClient};
/// use url::Url;
///
/// # fn demo() -> Result<(), notipoll::poll::PollError> {
/// let source = RemoteSource::new(
///     ReqwestClient::new(),
///     Url::parse("https://queue.example.com/api/v1/").unwrap(),
/// );
/// let service = Arc::new(BatchPollService::new(
///     source,
///     Duration::from_secs(30),
///     Some(100),
/// )?);
///
/// // Launch the loop as an independent task, cancel out-of-band:
/// let poller = Arc::clone(&service);
/// tokio::spawn(async move { poller.start_polling().await });
/// service.subscription().cancel();
/// # Ok(())
/// # }
/// ```
pub struct PollService<S, P, D = TokioSleeper> {
    subscription: Subscription<S, P, D>,
}

/// Polling service delivering one [`Notification`] per iteration.
pub type SinglePollService<S, D = TokioSleeper> = PollService<S, Notification, D>;

/// Polling service delivering one [`NotificationBatch`] per iteration.
pub type BatchPollService<S, D = TokioSleeper> = PollService<S, NotificationBatch, D>;

impl<S, P> PollService<S, P, TokioSleeper>
where
    S: NotificationSource,
    P: PollPayload,
{
    /// Creates an inert service bound to a fresh, empty registry.
    ///
    /// # Arguments
    ///
    /// * `source` - The notification source to poll
    /// * `interval` - Delay between polling iterations; fixed for the
    ///   service's lifetime
    /// * `limit` - Optional batch-size limit, `1..=1000`
    ///
    /// # Errors
    ///
    /// Returns [`PollError::ZeroInterval`] for a zero interval and
    /// [`PollError::InvalidLimit`] for an out-of-range limit, both
    /// before any I/O.
    pub fn new(source: S, interval: Duration, limit: Option<u32>) -> Result<Self, PollError> {
        let limit = limit
            .map(BatchLimit::new)
            .transpose()
            .map_err(PollError::InvalidLimit)?;

        Ok(Self {
            subscription: Subscription::new(source, interval, limit)?,
        })
    }
}

impl<S, P: PollPayload, D> PollService<S, P, D> {
    /// Replaces the sleeper used for inter-iteration delays.
    ///
    /// Primarily useful for testing.
    #[must_use]
    pub fn with_sleeper<D2: Sleeper>(self, sleeper: D2) -> PollService<S, P, D2> {
        PollService {
            subscription: self.subscription.with_sleeper(sleeper),
        }
    }

    /// Appends a subscriber to the registry.
    ///
    /// Returns `&Self` so registrations chain:
    /// `service.add_subscriber(a).add_subscriber(b)`. Safe to call
    /// while polling is in flight; the subscriber sees payloads from
    /// the next iteration on. Registering the same `Arc` twice
    /// produces duplicate delivery.
    pub fn add_subscriber<T: Subscriber<P>>(&self, subscriber: Arc<T>) -> &Self {
        self.subscription.subscribers().add(subscriber);
        self
    }

    /// Removes the first registry entry referring to `subscriber`.
    ///
    /// No-op if the subscriber is not registered; calling twice with
    /// the same subscriber removes at most one duplicate per call.
    pub fn unsubscribe<T: Subscriber<P> + ?Sized>(&self, subscriber: &Arc<T>) {
        self.subscription.subscribers().remove(subscriber);
    }

    /// Returns, in registration order, every subscriber whose concrete
    /// type is `T`.
    #[must_use]
    pub fn subscribers_of<T: Subscriber<P>>(&self) -> Vec<Arc<T>> {
        self.subscription.subscribers().of_kind::<T>()
    }

    /// Returns the current number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscription.subscribers().len()
    }

    /// The embedded subscription, exposed for out-of-band control
    /// (cancellation, interval inspection).
    #[must_use]
    pub const fn subscription(&self) -> &Subscription<S, P, D> {
        &self.subscription
    }
}

impl<S, P, D> PollService<S, P, D>
where
    S: NotificationSource,
    P: PollPayload,
    D: Sleeper,
{
    /// Starts the subscription's polling loop.
    ///
    /// Suspends for the lifetime of the subscription: it resolves only
    /// when the loop ends via cancellation (`Ok`) or fault (`Err`).
    /// Callers that want to run it alongside other work launch it as
    /// an independent task (see the type-level example) and cancel via
    /// [`Subscription::cancel`].
    ///
    /// # Errors
    ///
    /// Propagates the terminating [`PollError`] of a faulted loop.
    pub async fn start_polling(&self) -> Result<(), PollError> {
        self.subscription.run().await
    }
}
